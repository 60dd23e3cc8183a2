//! Office Open XML (DOCX) paragraph extraction
//!
//! Units are the body paragraphs of the main document part: `w:p` elements
//! sitting directly under `w:body`. Paragraphs inside tables, text boxes or
//! headers are not units.

use crate::error::Result;
use crate::input::archive::{open_package, read_member, read_optional_member};
use crate::input::text_extractor::TextExtractor;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

const DEFAULT_MAIN_PART: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL: &str = "/officeDocument";

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let mut archive = open_package(path)?;

        let main_part = match read_optional_member(&mut archive, "_rels/.rels")? {
            Some(rels) => main_part_from_rels(&rels)?,
            None => None,
        }
        .unwrap_or_else(|| DEFAULT_MAIN_PART.to_string());
        debug!("Main document part of {}: {}", path.display(), main_part);

        let document = read_member(&mut archive, &main_part)?;
        parse_paragraphs(&document)
    }
}

/// Target of the `officeDocument` relationship in the package `_rels/.rels`.
pub fn main_part_from_rels(rels_xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(rels_xml);
    reader.trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if let (Some(rel_type), Some(target)) = (rel_type, target) {
                    if rel_type.ends_with(OFFICE_DOCUMENT_REL) {
                        return Ok(Some(target.trim_start_matches('/').to_string()));
                    }
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Collect the text of every body paragraph of a `document.xml`.
///
/// Paragraph text is the concatenation of its runs (`w:r`, also inside
/// `w:hyperlink`): `w:t` content, `w:tab` as a tab, `w:br`/`w:cr` as a newline.
pub fn parse_paragraphs(xml_content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml_content);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;
    // stack length once the current paragraph is pushed
    let mut para_len = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                if current.is_none() && name == b"w:p" && is_body(&stack) {
                    current = Some(String::new());
                    para_len = stack.len() + 1;
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.name();
                if current.is_none() && name.as_ref() == b"w:p" && is_body(&stack) {
                    paragraphs.push(String::new());
                } else if let Some(paragraph) = current.as_mut() {
                    if in_run(&stack[para_len..]) {
                        match name.as_ref() {
                            b"w:tab" => paragraph.push('\t'),
                            b"w:br" | b"w:cr" => paragraph.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(e) => {
                if let Some(paragraph) = current.as_mut() {
                    if in_run_text(&stack[para_len..]) {
                        paragraph.push_str(&e.unescape()?);
                    }
                }
            }
            Event::End(_) => {
                stack.pop();
                if current.is_some() && stack.len() < para_len {
                    paragraphs.extend(current.take());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name.as_slice() == b"w:body")
}

fn in_run(tail: &[Vec<u8>]) -> bool {
    path_is(tail, &[b"w:r"]) || path_is(tail, &[b"w:hyperlink", b"w:r"])
}

fn in_run_text(tail: &[Vec<u8>]) -> bool {
    path_is(tail, &[b"w:r", b"w:t"]) || path_is(tail, &[b"w:hyperlink", b"w:r", b"w:t"])
}

fn path_is(tail: &[Vec<u8>], expected: &[&[u8]]) -> bool {
    tail.len() == expected.len()
        && tail
            .iter()
            .zip(expected)
            .all(|(name, want)| name.as_slice() == *want)
}
