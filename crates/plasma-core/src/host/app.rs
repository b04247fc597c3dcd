use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::action::{Action, ACTION_FILE};
use super::{ActionManager, App, DiscoveryRoot};
use crate::error::HostError;
use crate::vfs::FileSystem;

/// In-process host.
///
/// The working directory is always scanned first; registered roots follow in
/// registration order.
pub struct HostApp {
    wd: PathBuf,
    fs: Arc<dyn FileSystem>,
    registered: Vec<DiscoveryRoot>,
    manager: ActionManager,
}

impl HostApp {
    pub fn new(wd: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            wd,
            fs,
            registered: Vec::new(),
            manager: ActionManager::new(),
        }
    }

    /// Roots added through [`App::register_fs`], without the implicit working directory root.
    pub fn registered_roots(&self) -> &[DiscoveryRoot] {
        &self.registered
    }

    /// Every root discovery scans, in scan order.
    pub fn discovery_roots(&self) -> Vec<DiscoveryRoot> {
        let mut roots = Vec::with_capacity(self.registered.len() + 1);
        roots.push(DiscoveryRoot::new(self.wd.clone(), self.wd.clone()));
        roots.extend(self.registered.iter().cloned());
        roots
    }

    /// Build the action catalog keyed by id.
    ///
    /// When several roots yield the same id, the first root scanned wins.
    /// Definitions the installed provider cannot name are left out.
    pub fn discover(&self) -> BTreeMap<String, Action> {
        let mut catalog = BTreeMap::new();

        for root in self.discovery_roots() {
            for path in self.fs.list_files(&root.fs_root, ACTION_FILE) {
                let Ok(rel_path) = path.strip_prefix(&root.fs_root) else {
                    continue;
                };
                let action = Action::new(root.clone(), rel_path.to_path_buf());
                let id = self.manager.get_id(&action);
                if id.is_empty() {
                    continue;
                }
                catalog.entry(id).or_insert(action);
            }
        }

        catalog
    }
}

impl App for HostApp {
    fn wd(&self) -> &Path {
        &self.wd
    }

    fn fs(&self) -> &dyn FileSystem {
        &*self.fs
    }

    fn register_fs(&mut self, root: DiscoveryRoot) -> Result<(), HostError> {
        if !self.fs.is_dir(&root.fs_root) {
            return Err(HostError::RootNotADirectory(root.fs_root));
        }
        debug!("Registered discovery root {:?} (base {:?})", root.fs_root, root.base);
        self.registered.push(root);
        Ok(())
    }

    fn action_manager(&mut self) -> &mut ActionManager {
        &mut self.manager
    }
}
