//! Files selected for scanning

use crate::input::FileType;
use std::path::{Path, PathBuf};

/// A compatible file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub file_type: FileType,
}

impl ScanTarget {
    /// `None` unless the file name carries a compatible extension.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_type = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(FileType::from_file_name)?;
        Some(Self { path, file_type })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
