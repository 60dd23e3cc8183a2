//! Console output for found doubts and read failures

pub mod formatter;
pub mod report;

pub use formatter::{ConsoleReporter, ConsoleStyle};
pub use report::{relative_location, DoubtReport, BASE_DIRECTORY};
