//! Text extraction from the supported file formats
//!
//! Every extractor turns a file into an ordered list of text units: lines for
//! plain text, paragraphs for word-processor documents. Unit `n` is reported as
//! "line n + 1".

use crate::error::Result;
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)?;
        Ok(split_lines(&content))
    }
}

/// Split on `\n`, `\r\n` and lone `\r`, dropping the terminators.
///
/// A trailing terminator does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                lines.push(rest[..pos].to_string());
                let terminator = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + terminator..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}
