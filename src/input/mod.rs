//! Input processing module
//! Handles file type detection and text extraction per format

pub mod archive;
pub mod file_detector;
pub mod manager;
pub mod odf;
pub mod ooxml;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::InputManager;
pub use text_extractor::TextExtractor;
