//! Report data for found doubts

use std::fmt;
use std::path::Path;

/// Location text used when a file sits directly in the scanned directory.
pub const BASE_DIRECTORY: &str = "the base directory";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubtReport {
    /// 1-based line (txt) or paragraph (odt/docx) number
    pub line: usize,
    pub file_name: String,
    pub location: String,
}

impl fmt::Display for DoubtReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Found doubt at line {} in file {} in {}.",
            self.line, self.file_name, self.location
        )
    }
}

/// Directory of `file` relative to `root`, or [`BASE_DIRECTORY`] when it is `root` itself.
pub fn relative_location(root: &Path, file: &Path) -> String {
    let dir = file.parent().unwrap_or(file);
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    if relative.as_os_str().is_empty() {
        BASE_DIRECTORY.to_string()
    } else {
        relative.display().to_string()
    }
}
