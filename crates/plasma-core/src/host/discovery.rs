use std::path::PathBuf;

/// A subtree the host scans for actions.
///
/// Ids are derived from paths relative to `fs_root`; `base` is the logical
/// location the actions are reported against (the working directory for
/// conventional roots).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiscoveryRoot {
    pub fs_root: PathBuf,
    pub base: PathBuf,
}

impl DiscoveryRoot {
    pub fn new(fs_root: PathBuf, base: PathBuf) -> Self {
        Self { fs_root, base }
    }
}
