//! `OpenDocument` Text (ODT) paragraph extraction
//!
//! ODT files are ZIP archives; the body lives in `content.xml` and the page
//! headers and footers in the master pages of `styles.xml`. Every `text:p`
//! element is one unit, in document order, wherever it sits (tables, lists,
//! frames, notes, headers). Body paragraphs come first, then those of
//! `styles.xml`. Headings (`text:h`) are not paragraphs.

use crate::error::Result;
use crate::input::archive::{open_package, read_member, read_optional_member};
use crate::input::text_extractor::TextExtractor;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;

pub struct OdtExtractor;

impl TextExtractor for OdtExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let mut archive = open_package(path)?;
        let content = read_member(&mut archive, "content.xml")?;
        let mut paragraphs = parse_paragraphs(&content)?;

        if let Some(styles) = read_optional_member(&mut archive, "styles.xml")? {
            paragraphs.extend(parse_paragraphs(&styles)?);
        }
        Ok(paragraphs)
    }
}

/// Collect the text of every `text:p` in an ODF XML part.
///
/// A paragraph's text includes everything nested inside it, so a paragraph
/// carrying a footnote also carries the note body; the note's own paragraphs
/// follow it as separate units.
pub fn parse_paragraphs(xml_content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(false);

    let mut paragraphs: Vec<String> = Vec::new();
    // indices into `paragraphs` of the currently open text:p elements
    let mut open: Vec<usize> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if e.name().as_ref() == b"text:p" {
                    open.push(paragraphs.len());
                    paragraphs.push(String::new());
                } else if let Some(text) = inline_whitespace(&e)? {
                    append(&mut paragraphs, &open, &text);
                }
            }
            Event::Empty(e) => {
                if e.name().as_ref() == b"text:p" {
                    paragraphs.push(String::new());
                } else if let Some(text) = inline_whitespace(&e)? {
                    append(&mut paragraphs, &open, &text);
                }
            }
            Event::Text(e) if !open.is_empty() => {
                let text = e.unescape()?;
                append(&mut paragraphs, &open, &text);
            }
            Event::End(e) if e.name().as_ref() == b"text:p" => {
                open.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// Text produced by the ODF whitespace elements.
fn inline_whitespace(element: &BytesStart<'_>) -> Result<Option<String>> {
    let text = match element.name().as_ref() {
        b"text:tab" => "\t".to_string(),
        b"text:line-break" => "\n".to_string(),
        b"text:s" => {
            let mut count = 1;
            for attr in element.attributes() {
                let attr = attr?;
                if attr.key.as_ref() == b"text:c" {
                    count = std::str::from_utf8(&attr.value)
                        .ok()
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(1);
                }
            }
            " ".repeat(count)
        }
        _ => return Ok(None),
    };
    Ok(Some(text))
}

fn append(paragraphs: &mut [String], open: &[usize], text: &str) {
    for &idx in open {
        paragraphs[idx].push_str(text);
    }
}
