//! Interactive choice of the directory to scan.

use crate::error::{DoubtFinderError, Result};
use crate::output::ConsoleReporter;
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Ask for a directory until the answer names an existing one.
///
/// An `initial` candidate (e.g. from the command line) is tried first. The only
/// error besides a failed write is end of input, where no answer can ever come.
pub fn select_directory<R, W>(
    initial: Option<PathBuf>,
    input: &mut R,
    reporter: &mut ConsoleReporter<W>,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    if let Some(candidate) = initial {
        if candidate.is_dir() {
            return Ok(candidate);
        }
        debug!("Rejected directory argument: {}", candidate.display());
        reporter.invalid_directory()?;
    }

    loop {
        reporter.prompt_directory()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DoubtFinderError::InvalidInput(
                "input closed before a directory was given".to_string(),
            ));
        }

        let candidate = PathBuf::from(strip_line_ending(&line));
        if candidate.is_dir() {
            return Ok(candidate);
        }
        debug!("Rejected directory input: {:?}", line);
        reporter.invalid_directory()?;
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}
