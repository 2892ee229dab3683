/*!
Test for BOM and encoding handling in HTML files
*/

use arm_doc_cvt::core::read_html_file;
use arm_doc_cvt::ConvertError;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_file_reading_with_bom() -> std::io::Result<()> {
    // Create temporary file with UTF-8 BOM
    let mut temp_file = NamedTempFile::new()?;
    let html = "\u{FEFF}<h2 class=\"instruction-section\">NOP</h2>";
    temp_file.write_all(html.as_bytes())?;

    let content = read_html_file(temp_file.path()).unwrap();

    // BOM should be stripped
    assert!(!content.starts_with('\u{FEFF}'));
    assert!(content.starts_with("<h2"));

    Ok(())
}

#[test]
fn test_utf8_bom_bytes() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    let mut content = vec![0xEF, 0xBB, 0xBF]; // UTF-8 BOM
    content.extend_from_slice("<p>Compute CRC.</p>".as_bytes());
    temp_file.write_all(&content)?;

    let content = read_html_file(temp_file.path()).unwrap();
    assert_eq!(content, "<p>Compute CRC.</p>");

    Ok(())
}

#[test]
fn test_invalid_utf8_is_replaced_not_rejected() -> std::io::Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(&[b'<', b'p', b'>', b'A', 0xA9, b'B', b'<', b'/', b'p', b'>'])?;

    let content = read_html_file(temp_file.path()).unwrap();
    assert_eq!(content, "<p>A\u{FFFD}B</p>");

    Ok(())
}

#[test]
fn test_missing_file_is_a_per_file_read_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let err = read_html_file(&temp_dir.path().join("absent.html")).unwrap_err();
    assert!(matches!(err, ConvertError::Read { .. }));
    assert!(err.is_per_file());
}
