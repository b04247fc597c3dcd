//! Contracts of the action host, plus a small in-process host that honors them.
//!
//! The host owns discovery and naming; plugins only extend the root set and
//! swap the id provider during startup.

use std::path::Path;

use crate::error::{HostError, PluginError};
use crate::vfs::FileSystem;

mod action;
mod app;
mod discovery;
mod manager;
mod registry;

pub use action::{Action, DefaultIdProvider, IdProvider};
pub use app::HostApp;
pub use discovery::DiscoveryRoot;
pub use manager::ActionManager;
pub use registry::PluginRegistry;

/// Application handle passed to plugins at startup.
pub trait App {
    /// Working directory of the application (absolute path)
    fn wd(&self) -> &Path;

    fn fs(&self) -> &dyn FileSystem;

    /// Add a discovery root. Roots are scanned in registration order.
    fn register_fs(&mut self, root: DiscoveryRoot) -> Result<(), HostError>;

    fn action_manager(&mut self) -> &mut ActionManager;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    /// Startup priority. Higher weights initialize first.
    pub weight: i32,
}

/// A startup participant
pub trait Plugin: Send + Sync {
    fn info(&self) -> PluginInfo;

    /// Called once, before the host's action discovery pass.
    fn on_app_init(&self, app: &mut dyn App) -> Result<(), PluginError>;
}
