//! Input manager routing each file type to its extractor

use crate::error::{DoubtFinderError, Result};
use crate::input::file_detector::FileType;
use crate::input::odf::OdtExtractor;
use crate::input::ooxml::DocxExtractor;
use crate::input::text_extractor::{PlainTextExtractor, TextExtractor};
use log::debug;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    extractors: HashMap<FileType, Box<dyn TextExtractor>>,
}

impl InputManager {
    /// Manager with the built-in txt, odt and docx extractors.
    pub fn new() -> Self {
        Self::empty()
            .with_extractor(FileType::Text, PlainTextExtractor)
            .with_extractor(FileType::Odt, OdtExtractor)
            .with_extractor(FileType::Docx, DocxExtractor)
    }

    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    pub fn with_extractor(mut self, file_type: FileType, extractor: impl TextExtractor + 'static) -> Self {
        self.register(file_type, extractor);
        self
    }

    pub fn register(&mut self, file_type: FileType, extractor: impl TextExtractor + 'static) {
        self.extractors.insert(file_type, Box::new(extractor));
    }

    pub fn supports(&self, file_type: FileType) -> bool {
        self.extractors.contains_key(&file_type)
    }

    pub fn extract_units(&self, file_type: FileType, path: &Path) -> Result<Vec<String>> {
        let extractor = self.extractors.get(&file_type).ok_or_else(|| {
            DoubtFinderError::UnsupportedFormat(format!(
                "No extractor registered for .{} ({})",
                file_type,
                path.display()
            ))
        })?;

        debug!("Extracting {} units from {}", file_type, path.display());
        extractor.extract(path)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
