//! Recursive discovery of compatible files.

use crate::scan::target::ScanTarget;
use log::debug;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

pub struct DirectoryWalker {
    follow_symlinks: bool,
}

impl DirectoryWalker {
    pub fn new() -> Self {
        Self {
            follow_symlinks: false,
        }
    }

    /// Descend into symlinked directories.
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Lazily yield every compatible file under `root`, in traversal order.
    ///
    /// Unreadable entries are skipped.
    pub fn walk<'a>(&self, root: &'a Path) -> impl Iterator<Item = ScanTarget> + 'a {
        WalkDir::new(root)
            .follow_links(self.follow_symlinks)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(is_file)
            .filter_map(|entry| ScanTarget::from_path(entry.into_path()))
    }
}

impl Default for DirectoryWalker {
    fn default() -> Self {
        Self::new()
    }
}

/// Regular files, plus symlinks that resolve to one.
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}
