//! The doubt scanner: extracts each file's text units and reports those that
//! contain the marker.
//!
//! Failures are per file. A file that cannot be read or parsed is reported
//! (when its error category is visible) and skipped; the scan goes on.

use crate::config::ErrorConfig;
use crate::error::{DoubtFinderError, ErrorCategory, Result};
use crate::input::InputManager;
use crate::output::{relative_location, ConsoleReporter, DoubtReport};
use crate::scan::target::ScanTarget;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DOUBT_MARKER: &str = "(?)";

/// Presence test only; several markers on one unit still count once.
pub fn contains_doubt(unit: &str) -> bool {
    unit.contains(DOUBT_MARKER)
}

/// Settings fixed for a whole run.
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub root: PathBuf,
    pub errors: ErrorConfig,
}

impl ScanContext {
    pub fn new(root: impl Into<PathBuf>, errors: ErrorConfig) -> Self {
        Self {
            root: root.into(),
            errors,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn shows(&self, category: ErrorCategory) -> bool {
        match category {
            ErrorCategory::Decode => self.errors.show_decode_errors,
            ErrorCategory::Permission => self.errors.show_permission_errors,
            ErrorCategory::Other => self.errors.show_other_errors,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_failed: usize,
    pub doubts_found: usize,
}

pub struct DoubtScanner<'a, W: Write> {
    context: ScanContext,
    inputs: InputManager,
    reporter: &'a mut ConsoleReporter<W>,
}

impl<'a, W: Write> DoubtScanner<'a, W> {
    pub fn new(context: ScanContext, inputs: InputManager, reporter: &'a mut ConsoleReporter<W>) -> Self {
        Self {
            context,
            inputs,
            reporter,
        }
    }

    /// Scan one file and return how many doubt lines were printed.
    pub fn scan(&mut self, target: &ScanTarget) -> Result<usize> {
        let units = self.inputs.extract_units(target.file_type, target.path())?;
        self.report_doubts(target, &units)
    }

    /// Scan every target in order. Only output failures abort the run.
    pub fn scan_all<I>(&mut self, targets: I) -> Result<ScanSummary>
    where
        I: IntoIterator<Item = ScanTarget>,
    {
        let mut summary = ScanSummary::default();

        for target in targets {
            match self.inputs.extract_units(target.file_type, target.path()) {
                Ok(units) => {
                    summary.doubts_found += self.report_doubts(&target, &units)?;
                    summary.files_scanned += 1;
                }
                Err(e) => {
                    summary.files_failed += 1;
                    self.report_failure(&target, &e)?;
                }
            }
        }

        info!(
            "Scanned {} files under {} ({} failed), {} doubts found",
            summary.files_scanned,
            self.context.root().display(),
            summary.files_failed,
            summary.doubts_found
        );
        Ok(summary)
    }

    fn report_doubts(&mut self, target: &ScanTarget, units: &[String]) -> Result<usize> {
        let location = relative_location(self.context.root(), target.path());
        let mut found = 0;

        for (idx, unit) in units.iter().enumerate() {
            if !contains_doubt(unit) {
                continue;
            }
            self.reporter.doubt(&DoubtReport {
                line: idx + 1,
                file_name: target.file_name(),
                location: location.clone(),
            })?;
            found += 1;
        }

        debug!("{}: {} units, {} doubts", target.path().display(), units.len(), found);
        Ok(found)
    }

    fn report_failure(&mut self, target: &ScanTarget, error: &DoubtFinderError) -> Result<()> {
        debug!("Skipping {}: {}", target.path().display(), error);
        if self.context.shows(error.category()) {
            let location = relative_location(self.context.root(), target.path());
            self.reporter.read_error(&target.file_name(), &location, error)?;
        }
        Ok(())
    }
}
