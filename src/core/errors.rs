/*!
# Error System for ARM Doc Converter

Typed errors for the conversion library. Binaries wrap them with `anyhow`.
*/

use std::path::PathBuf;
use thiserror::Error;

/// Результат операций конвертера
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Ошибки конвертации документации
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Unable to read source folder {}: {source}", .path.display())]
    SourceFolder {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{role} is not an existing directory: {}", .path.display())]
    NotADirectory { role: &'static str, path: PathBuf },

    #[error("Unable to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Unable to serialize instruction index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// True for errors that concern a single input file and must not stop the run
    pub fn is_per_file(&self) -> bool {
        matches!(self, ConvertError::Read { .. })
    }
}
