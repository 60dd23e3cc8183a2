//! Reading members out of ODF and OOXML zip packages

use crate::error::{DoubtFinderError, Result};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

pub fn open_package(path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(ZipArchive::new(BufReader::new(file))?)
}

/// Read a package member as UTF-8 text.
///
/// # Errors
///
/// `DocumentParse` when the member is absent or not UTF-8, `Io`/`Zip` when it cannot be read.
pub fn read_member<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut member = archive.by_name(name).map_err(|e| match e {
        zip::result::ZipError::FileNotFound => {
            DoubtFinderError::DocumentParse(format!("Missing required file: {}", name))
        }
        other => other.into(),
    })?;

    let mut content = Vec::new();
    member.read_to_end(&mut content)?;
    String::from_utf8(content)
        .map_err(|e| DoubtFinderError::DocumentParse(format!("{} is not valid UTF-8: {}", name, e)))
}

/// Like [`read_member`], but an absent member is `Ok(None)`.
pub fn read_optional_member<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    if !archive.file_names().any(|member| member == name) {
        return Ok(None);
    }
    read_member(archive, name).map(Some)
}
