//! Plasma project conventions.
//!
//! Actions live under `src/` (and, after package composition, under
//! `.plasma/package/compose/merged/src/`), but their ids should read as if
//! they sat at the project top level: `platform:prepare`, not
//! `src.platform:prepare`.

use std::sync::Arc;

use log::debug;

use crate::config::ConventionsConfig;
use crate::error::PluginError;
use crate::host::{App, Plugin, PluginInfo};

mod normalizer;
mod registrar;

pub use normalizer::{normalize_id, SrcPrefixIdProvider};
pub use registrar::register_roots;

/// Primary source directory, relative to the working directory
pub const SRC_DIR: &str = "src";
/// Source directory produced by package composition, relative to the working directory
pub const COMPOSE_MERGED_SRC_DIR: &str = ".plasma/package/compose/merged/src";
/// Id fragment that marks the start of a source tree
pub const SRC_MARKER: &str = "src.";

/// Runs ahead of default-weight plugins so roots exist before discovery.
pub const PLUGIN_WEIGHT: i32 = 1;

/// Startup participant applying both conventions.
#[derive(Debug, Clone, Default)]
pub struct ConventionsPlugin {
    config: ConventionsConfig,
}

impl ConventionsPlugin {
    pub fn new(config: ConventionsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ConventionsPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "plasma-conventions",
            weight: PLUGIN_WEIGHT,
        }
    }

    fn on_app_init(&self, app: &mut dyn App) -> Result<(), PluginError> {
        if self.config.register_roots {
            register_roots(app)?;
        }

        if self.config.normalize_ids {
            let manager = app.action_manager();
            let provider = SrcPrefixIdProvider::new(manager.default_id_provider());
            manager.set_id_provider(Arc::new(provider));
            debug!("Installed {} id normalizer", SRC_MARKER);
        }

        Ok(())
    }
}
