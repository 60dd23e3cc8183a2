//! Error handling for the doubt finder

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DoubtFinderError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Text decoding error: {0}")]
    TextDecode(#[from] std::string::FromUtf8Error),

    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Document parse error: {0}")]
    DocumentParse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DoubtFinderError>;

/// Visibility bucket an error falls into when a file fails to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Decode,
    Permission,
    Other,
}

impl DoubtFinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DoubtFinderError::TextDecode(_) => ErrorCategory::Decode,
            DoubtFinderError::Io(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                ErrorCategory::Permission
            }
            DoubtFinderError::Zip(zip::result::ZipError::Io(e))
                if e.kind() == io::ErrorKind::PermissionDenied =>
            {
                ErrorCategory::Permission
            }
            _ => ErrorCategory::Other,
        }
    }
}

/// quick-xml reports unescaping problems separately from reader errors
impl From<quick_xml::events::attributes::AttrError> for DoubtFinderError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DoubtFinderError::DocumentParse(format!("Invalid XML attribute: {}", err))
    }
}
