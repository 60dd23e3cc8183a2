//! Scan pipeline: directory selection, file discovery and doubt scanning

pub mod scanner;
pub mod selector;
pub mod target;
pub mod walker;

pub use scanner::{contains_doubt, DoubtScanner, ScanContext, ScanSummary, DOUBT_MARKER};
pub use selector::select_directory;
pub use target::ScanTarget;
pub use walker::DirectoryWalker;
