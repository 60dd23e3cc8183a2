//! File type detection

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Text,
    Odt,
    Docx,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::Text, FileType::Odt, FileType::Docx];

    /// Case-sensitive: `TXT` is not a compatible extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "txt" => Some(FileType::Text),
            "odt" => Some(FileType::Odt),
            "docx" => Some(FileType::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        extension_of(name).and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileType::Text => "txt",
            FileType::Odt => "odt",
            FileType::Docx => "docx",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Everything after the last `.` of a file name, or `None` when there is no dot.
///
/// Unlike `Path::extension`, a dotfile such as `.txt` yields `txt`.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}
