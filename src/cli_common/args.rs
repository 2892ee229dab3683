//! Аргументы командной строки конвертера

use clap::Parser;
use std::path::PathBuf;

use crate::core::ConvertOptions;

/// Общие аргументы логирования
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Converts documentation on ARM instructions in HTML form into small JSON index
#[derive(Parser, Debug)]
#[command(name = "arm-doc-cvt", version, about)]
pub struct ConvertArgs {
    /// Folder with instruction HTML pages
    #[arg(value_name = "srcFolder", value_parser = existing_directory)]
    pub src_folder: PathBuf,

    /// Folder to write <setName>.json into
    #[arg(value_name = "dstFolder", value_parser = existing_directory)]
    pub dst_folder: PathBuf,

    /// Base name of the output JSON file
    #[arg(value_name = "setName")]
    pub set_name: String,

    #[clap(flatten)]
    pub common: CommonArgs,
}

impl CommonArgs {
    /// Определяет уровень логирования на основе флагов
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Проверяет, нужно ли выводить информацию
    pub fn should_print(&self) -> bool {
        !self.quiet
    }
}

impl ConvertArgs {
    pub fn to_options(&self) -> ConvertOptions {
        ConvertOptions::new(&self.src_folder, &self.dst_folder, self.set_name.clone())
    }
}

/// Clap value parser: the path must be an existing directory
fn existing_directory(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("directory does not exist: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(format!("path is not a directory: {}", path.display()));
    }
    Ok(path)
}
