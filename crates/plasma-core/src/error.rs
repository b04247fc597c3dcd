//! Error types for the plasma conventions layer.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the host's registration APIs.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Discovery root is not a directory: {0:?}")]
    RootNotADirectory(PathBuf),
}

/// Startup failures. Any of these aborts application launch.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Plugin {plugin} failed to initialize")]
    Init {
        plugin: &'static str,
        #[source]
        source: HostError,
    },

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
