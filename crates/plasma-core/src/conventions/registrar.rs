use log::debug;

use super::{COMPOSE_MERGED_SRC_DIR, SRC_DIR};
use crate::error::HostError;
use crate::host::{App, DiscoveryRoot};

/// Register each conventional source directory that exists as a discovery root.
///
/// Roots are based at the working directory, so `src/platform/actions/prepare`
/// is named `platform:prepare`. Missing directories are not an error and are
/// skipped without a trace. Existence is checked once; directories created later
/// are not picked up.
///
/// Returns the number of roots registered.
pub fn register_roots(app: &mut dyn App) -> Result<usize, HostError> {
    let wd = app.wd().to_path_buf();
    let mut registered = 0;

    for dir in [SRC_DIR, COMPOSE_MERGED_SRC_DIR] {
        let fs_root = wd.join(dir);
        if !app.fs().is_dir(&fs_root) {
            continue;
        }
        debug!("Using {:?} as a discovery root", fs_root);
        app.register_fs(DiscoveryRoot::new(fs_root, wd.clone()))?;
        registered += 1;
    }

    Ok(registered)
}
