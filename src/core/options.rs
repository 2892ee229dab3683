/*!
# Conversion Options

The only configuration the converter takes: where to read HTML from, where to
write the index and what to call it. Built from CLI arguments.
*/

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::errors::{ConvertError, ConvertResult};

/// Параметры одного запуска конвертации
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertOptions {
    /// Folder with vendor HTML pages
    pub src_folder: PathBuf,
    /// Folder the `<set_name>.json` index is written to
    pub dst_folder: PathBuf,
    /// Base name of the output file, used verbatim
    pub set_name: String,
}

impl ConvertOptions {
    pub fn new(
        src_folder: impl Into<PathBuf>,
        dst_folder: impl Into<PathBuf>,
        set_name: impl Into<String>,
    ) -> Self {
        Self {
            src_folder: src_folder.into(),
            dst_folder: dst_folder.into(),
            set_name: set_name.into(),
        }
    }

    /// Путь к выходному JSON файлу
    pub fn output_path(&self) -> PathBuf {
        output_path(&self.dst_folder, &self.set_name)
    }

    /// Checks that both folders exist and are directories.
    pub fn validate(&self) -> ConvertResult<()> {
        require_directory("srcFolder", &self.src_folder)?;
        require_directory("dstFolder", &self.dst_folder)?;
        Ok(())
    }
}

/// `<dst_folder>/<set_name>.json`
pub fn output_path(dst_folder: &Path, set_name: &str) -> PathBuf {
    dst_folder.join(format!("{}.json", set_name))
}

pub(crate) fn require_directory(role: &'static str, path: &Path) -> ConvertResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(ConvertError::NotADirectory {
            role,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_path_uses_set_name_verbatim() {
        let options = ConvertOptions::new("html", "out", "a64 base");
        assert_eq!(options.output_path(), Path::new("out").join("a64 base.json"));
    }

    #[test]
    fn test_validate_rejects_missing_folders() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path();

        assert!(ConvertOptions::new(existing, existing, "a64").validate().is_ok());

        let err = ConvertOptions::new(existing.join("missing"), existing, "a64")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory { role: "srcFolder", .. }));

        let err = ConvertOptions::new(existing, existing.join("missing"), "a64")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ConvertError::NotADirectory { role: "dstFolder", .. }));
    }
}
