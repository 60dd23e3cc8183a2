//! Doubt finder library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scan;

pub use config::Config;
pub use error::{DoubtFinderError, ErrorCategory, Result};
