use std::path::{Component, Path, PathBuf};

use super::DiscoveryRoot;

/// File name of an action definition
pub(crate) const ACTION_FILE: &str = "action.yaml";
/// Directory segment that separates an action's prefix from its name
pub(crate) const ACTIONS_DIR: &str = "actions";

/// A discovered action definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Definition file, relative to the root's filesystem view
    pub rel_path: PathBuf,
    /// Root the action was found in
    pub root: DiscoveryRoot,
}

impl Action {
    pub fn new(root: DiscoveryRoot, rel_path: PathBuf) -> Self {
        Self { rel_path, root }
    }

    pub fn abs_path(&self) -> PathBuf {
        self.root.fs_root.join(&self.rel_path)
    }
}

/// Computes the public identifier of an action.
///
/// Called from discovery and execution paths alike, so implementations must be
/// safe to share across threads.
pub trait IdProvider: Send + Sync {
    fn get_id(&self, action: &Action) -> String;
}

/// Default host naming.
///
/// `platform/actions/prepare/action.yaml` -> `platform:prepare`
/// `src/platform/actions/prepare/action.yaml` -> `src.platform:prepare`
/// `actions/prepare/action.yaml` -> `prepare`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultIdProvider;

impl DefaultIdProvider {
    /// Derive an id from a definition path relative to its root.
    /// Returns `None` when the path does not follow the `actions/<name>/action.yaml` layout.
    pub fn derive(rel_path: &Path) -> Option<String> {
        let parts: Vec<String> = rel_path
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().to_string()),
                _ => None,
            })
            .collect();

        let [prefix @ .., actions, name, file] = parts.as_slice() else {
            return None;
        };
        if file != ACTION_FILE || actions != ACTIONS_DIR {
            return None;
        }

        if prefix.is_empty() {
            Some(name.clone())
        } else {
            Some(format!("{}:{}", prefix.join("."), name))
        }
    }
}

impl IdProvider for DefaultIdProvider {
    fn get_id(&self, action: &Action) -> String {
        Self::derive(&action.rel_path).unwrap_or_default()
    }
}
