use std::cmp::Reverse;

use log::info;

use super::{App, Plugin};
use crate::error::PluginError;

/// Explicit plugin registration, in place of a process-wide plugin list.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) {
        self.plugins.push(Box::new(plugin));
    }

    /// Plugins in startup order: highest weight first, registration order among equals.
    pub fn ordered(&self) -> Vec<&dyn Plugin> {
        let mut plugins: Vec<&dyn Plugin> = self.plugins.iter().map(|p| p.as_ref()).collect();
        plugins.sort_by_key(|p| Reverse(p.info().weight));
        plugins
    }

    /// Run every plugin's startup hook once. The first failure aborts startup.
    pub fn init_all(&self, app: &mut dyn App) -> Result<(), PluginError> {
        for plugin in self.ordered() {
            let plugin_info = plugin.info();
            info!(
                "Initializing plugin {} (weight {})",
                plugin_info.name, plugin_info.weight
            );
            plugin.on_app_init(app).map_err(|e| match e {
                PluginError::Host(source) => PluginError::Init {
                    plugin: plugin_info.name,
                    source,
                },
                other => other,
            })?;
        }
        Ok(())
    }
}
