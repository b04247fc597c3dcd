//! Plasma Core Library
//!
//! Project conventions for the action host: extra discovery roots for
//! conventional source trees, and the id provider that hides source prefixes.
//!

pub mod config;
pub mod conventions;
pub mod error;
pub mod host;
pub mod vfs;

pub use config::ConventionsConfig;
pub use conventions::{normalize_id, register_roots, ConventionsPlugin, SrcPrefixIdProvider};
pub use error::{ConfigError, HostError, PluginError};
pub use host::{
    Action, ActionManager, App, DefaultIdProvider, DiscoveryRoot, HostApp, IdProvider, Plugin,
    PluginInfo, PluginRegistry,
};
pub use vfs::{FileSystem, PhysicalFileSystem};
