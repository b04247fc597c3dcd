use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Abstract interface for file system operations.
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists and is a directory. Any stat failure counts as "no".
    fn is_dir(&self, path: &Path) -> bool;

    /// List all files named `file_name` under the root directory.
    /// This should be a recursive search.
    fn list_files(&self, root: &Path, file_name: &str) -> Vec<PathBuf>;
}

/// Standard implementation of FileSystem using std::fs and walkdir.
pub struct PhysicalFileSystem;

impl FileSystem for PhysicalFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
    }

    fn list_files(&self, root: &Path, file_name: &str) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file() && entry.file_name() == file_name {
                files.push(entry.path().to_path_buf());
            }
        }

        files
    }
}
