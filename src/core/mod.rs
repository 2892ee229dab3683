/*!
# Core Module

Core functionality for the converter: error handling, run options and
file system helpers.
*/

pub mod errors;
pub mod fs_utils;
pub mod options;

pub use errors::{ConvertError, ConvertResult};
pub use fs_utils::{base_file_name, read_html_file};
pub use options::{output_path, ConvertOptions};
