//! Integration tests for the doubt finder

use doubt_finder::config::ErrorConfig;
use doubt_finder::input::InputManager;
use doubt_finder::output::ConsoleReporter;
use doubt_finder::scan::{DirectoryWalker, DoubtScanner, ScanContext, ScanSummary};
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const ODT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-content xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0" office:version="1.2"><office:body><office:text>"#;
const ODT_TAIL: &str = "</office:text></office:body></office:document-content>";

const DOCX_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;
const DOCX_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;
const DOCX_TAIL: &str = "<w:sectPr/></w:body></w:document>";

fn write_zip(path: &Path, members: &[(&str, String)]) {
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    for (name, body) in members {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(body.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

fn write_odt(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<text:p>{}</text:p>", p))
        .collect();
    write_zip(
        path,
        &[
            ("mimetype", "application/vnd.oasis.opendocument.text".to_string()),
            ("content.xml", format!("{}{}{}", ODT_HEAD, body, ODT_TAIL)),
        ],
    );
}

fn write_odt_with_header(path: &Path, paragraphs: &[&str], header: &str) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<text:p>{}</text:p>", p))
        .collect();
    let styles = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-styles xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:style="urn:oasis:names:tc:opendocument:xmlns:style:1.0" xmlns:text="urn:oasis:names:tc:opendocument:xmlns:text:1.0"><office:master-styles><style:master-page style:name="Standard"><style:header><text:p>{}</text:p></style:header></style:master-page></office:master-styles></office:document-styles>"#,
        header
    );
    write_zip(
        path,
        &[
            ("mimetype", "application/vnd.oasis.opendocument.text".to_string()),
            ("content.xml", format!("{}{}{}", ODT_HEAD, body, ODT_TAIL)),
            ("styles.xml", styles),
        ],
    );
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", p))
        .collect();
    write_zip(
        path,
        &[
            ("_rels/.rels", DOCX_RELS.to_string()),
            ("word/document.xml", format!("{}{}{}", DOCX_HEAD, body, DOCX_TAIL)),
        ],
    );
}

fn scan_dir(root: &Path, errors: ErrorConfig) -> (ScanSummary, Vec<String>) {
    let mut reporter = ConsoleReporter::new(Vec::new(), false);
    let summary = DoubtScanner::new(ScanContext::new(root, errors), InputManager::new(), &mut reporter)
        .scan_all(DirectoryWalker::new().walk(root))
        .unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    (summary, out.lines().map(str::to_string).collect())
}

#[test]
fn test_txt_at_root_reports_base_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "line1\n(?)\nline3").unwrap();

    let (summary, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(lines, vec!["Found doubt at line 2 in file a.txt in the base directory."]);
    assert_eq!(summary.doubts_found, 1);
}

#[test]
fn test_nested_odt_reports_relative_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("notes")).unwrap();
    write_odt(&dir.path().join("notes/b.odt"), &["intro", "unsure (?) here", "end"]);

    let (_, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(lines, vec!["Found doubt at line 2 in file b.odt in notes."]);
}

#[test]
fn test_odt_header_doubt_is_reported_after_body() {
    let dir = tempfile::tempdir().unwrap();
    write_odt_with_header(&dir.path().join("h.odt"), &["one", "two"], "draft header (?)");

    let (_, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(lines, vec!["Found doubt at line 3 in file h.odt in the base directory."]);
}

#[test]
fn test_docx_paragraph_index() {
    let dir = tempfile::tempdir().unwrap();
    write_docx(&dir.path().join("c.docx"), &["one", "two", "", "four (?) (?)"]);

    let (_, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(lines, vec!["Found doubt at line 4 in file c.docx in the base directory."]);
}

#[test]
fn test_deeply_nested_location() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("sub").join("dir");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("file.txt"), "(?)\n").unwrap();

    let (_, lines) = scan_dir(dir.path(), ErrorConfig::default());
    let location = Path::new("sub").join("dir");
    assert_eq!(
        lines,
        vec![format!("Found doubt at line 1 in file file.txt in {}.", location.display())]
    );
}

#[test]
fn test_unsupported_files_produce_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.md"), "(?)").unwrap();
    fs::write(dir.path().join("b.TXT"), "(?)").unwrap();
    fs::write(dir.path().join("txt"), "(?)").unwrap();
    fs::write(dir.path().join("c.doc"), "(?)").unwrap();

    let (summary, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert!(lines.is_empty());
    assert_eq!(summary, ScanSummary::default());
}

#[test]
fn test_multiple_markers_on_one_line_report_once() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "(?) and (?)\n").unwrap();

    let (_, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(lines.len(), 1);
}

#[test]
fn test_corrupt_documents_do_not_abort_the_scan() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.docx"), "plain bytes").unwrap();
    write_zip(&dir.path().join("empty.odt"), &[("mimetype", "x".to_string())]);
    fs::write(dir.path().join("ok.txt"), "fine\n(?)\n").unwrap();

    let (summary, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(summary.files_scanned, 1);
    assert_eq!(summary.files_failed, 2);
    assert!(lines.contains(&"Found doubt at line 2 in file ok.txt in the base directory.".to_string()));
    assert!(lines.contains(&"Error while reading file broken.docx in the base directory".to_string()));
    assert!(lines.contains(&"Error while reading file empty.odt in the base directory".to_string()));

    let quiet = ErrorConfig {
        show_decode_errors: false,
        show_permission_errors: false,
        show_other_errors: false,
    };
    let (_, lines) = scan_dir(dir.path(), quiet);
    assert_eq!(lines, vec!["Found doubt at line 2 in file ok.txt in the base directory."]);
}

#[test]
fn test_scan_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("x")).unwrap();
    fs::write(dir.path().join("a.txt"), "(?)\n").unwrap();
    fs::write(dir.path().join("x/b.txt"), "no\n(?)\n").unwrap();
    write_docx(&dir.path().join("x/c.docx"), &["(?)"]);

    let (_, first) = scan_dir(dir.path(), ErrorConfig::default());
    let (_, second) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(first.len(), 3);
    assert_eq!(
        first.into_iter().collect::<BTreeSet<_>>(),
        second.into_iter().collect::<BTreeSet<_>>()
    );
}

#[cfg(unix)]
#[test]
fn test_permission_error_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("locked.txt");
    fs::write(&locked, "(?)").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores file modes
    if fs::read(&locked).is_ok() {
        return;
    }

    let (summary, lines) = scan_dir(dir.path(), ErrorConfig::default());
    assert_eq!(summary.files_failed, 1);
    assert_eq!(lines[0], "Error while reading file locked.txt in the base directory");

    let hidden = ErrorConfig {
        show_permission_errors: false,
        ..ErrorConfig::default()
    };
    let (_, lines) = scan_dir(dir.path(), hidden);
    assert!(lines.is_empty());
}
