//! File system utility helpers (BOM-aware readers, etc.)
use std::fs;
use std::path::Path;

use super::errors::{ConvertError, ConvertResult};

/// Read an HTML file as UTF-8 text, stripping UTF-8 BOM if present.
///
/// Invalid byte sequences become U+FFFD; only I/O errors fail the read.
pub fn read_html_file(path: &Path) -> ConvertResult<String> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut content = String::from_utf8_lossy(&bytes).into_owned();
    if content.starts_with('\u{FEFF}') {
        content = content.trim_start_matches('\u{FEFF}').to_string();
    }
    Ok(content)
}

/// Base file name as it is recorded in the index (no directory part).
pub fn base_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
