/*!
# Index Builder

Проходит по папке с HTML документацией, извлекает данные из каждого
`.html` файла и собирает единый индекс инструкций.

One bad file never stops the run: a read error is logged and counted, and
the file contributes nothing. Stray bytes in a page are decoded lossily.
Only a source folder that cannot be listed at all is fatal.
*/

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::instruction_extractor::{FileExtraction, InstructionExtractor};
use super::instruction_index::InstructionIndex;
use crate::core::options::require_directory;
use crate::core::{ConvertError, ConvertOptions, ConvertResult};

/// Статистика одного запуска конвертации
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// `.html` entries found in the source folder
    pub html_files: usize,
    /// Files that could not be read
    pub files_failed: usize,
    /// Files without an `.instruction-section` heading
    pub files_without_section: usize,
    /// Files with a heading but no usable doc paragraph
    pub files_without_doc: usize,
    /// Names dropped because an earlier file already provided them
    pub duplicates_dropped: usize,
    /// Instructions in the final index
    pub instructions: usize,
    /// Where the index was meant to be written; set even if the write failed
    pub output_path: Option<PathBuf>,
}

/// Exact, case-sensitive `.html` suffix check
pub fn is_html_file_name(name: &str) -> bool {
    name.ends_with(".html")
}

/// Накопитель индекса по файлам
pub struct IndexBuilder {
    extractor: InstructionExtractor,
    index: InstructionIndex,
    summary: ConversionSummary,
}

impl IndexBuilder {
    pub fn new() -> ConvertResult<Self> {
        Ok(Self {
            extractor: InstructionExtractor::new()?,
            index: InstructionIndex::new(),
            summary: ConversionSummary::default(),
        })
    }

    /// Processes every `.html` entry directly inside `src_folder`, in file name order.
    pub fn add_folder(&mut self, src_folder: &Path) -> ConvertResult<()> {
        require_directory("srcFolder", src_folder)?;
        tracing::info!("Scanning {}", src_folder.display());

        let walker = WalkDir::new(src_folder)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(ConvertError::SourceFolder {
                        path: src_folder.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        "Skipping unreadable entry in {}: {}",
                        src_folder.display(),
                        err
                    );
                    continue;
                }
            };

            let is_html = entry.file_name().to_str().is_some_and(is_html_file_name);
            if is_html {
                self.add_file(entry.path());
            }
        }

        Ok(())
    }

    /// Extracts one file and merges it. Errors are logged, never returned.
    pub fn add_file(&mut self, path: &Path) {
        self.summary.html_files += 1;
        match self.extractor.extract_file(path) {
            Ok(extraction) => self.merge(&extraction),
            Err(err) => {
                self.summary.files_failed += 1;
                if err.is_per_file() {
                    tracing::warn!("Unable to convert {}. Error {}", path.display(), err);
                } else {
                    tracing::error!("Unable to convert {}. Error {}", path.display(), err);
                }
            }
        }
    }

    /// Добавляет результат одного файла; уже известные имена пропускаются
    pub fn merge(&mut self, extraction: &FileExtraction) {
        if !extraction.has_section {
            self.summary.files_without_section += 1;
            return;
        }
        if extraction.doc.is_none() {
            self.summary.files_without_doc += 1;
            return;
        }

        for (name, entry) in extraction.entries() {
            if !self.index.insert(name, entry) {
                self.summary.duplicates_dropped += 1;
                tracing::debug!("{} from {} is already indexed", name, extraction.file);
            }
        }
    }

    pub fn index(&self) -> &InstructionIndex {
        &self.index
    }

    pub fn finish(mut self) -> (InstructionIndex, ConversionSummary) {
        self.summary.instructions = self.index.len();
        (self.index, self.summary)
    }
}

/// Builds the index for a folder without writing anything.
pub fn build_index(src_folder: &Path) -> ConvertResult<(InstructionIndex, ConversionSummary)> {
    let mut builder = IndexBuilder::new()?;
    builder.add_folder(src_folder)?;
    Ok(builder.finish())
}

/// Полный цикл: папка с HTML → `<dst>/<set>.json`.
///
/// A failed write is logged and swallowed; the summary is returned either way.
pub fn convert_html_to_index(options: &ConvertOptions) -> ConvertResult<ConversionSummary> {
    let (index, mut summary) = build_index(&options.src_folder)?;
    summary.output_path = Some(options.output_path());

    match index.write_json(&options.dst_folder, &options.set_name) {
        Ok(path) => {
            tracing::info!("Wrote {} instructions to {}", index.len(), path.display());
        }
        Err(err) => {
            tracing::error!("Unable to write instruction index: {}", err);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs_integration::InstructionEntry;

    fn extraction(file: &str, names: &[&str], doc: Option<&str>) -> FileExtraction {
        FileExtraction {
            file: file.to_string(),
            has_section: true,
            names: names.iter().map(|n| n.to_string()).collect(),
            doc: doc.map(str::to_string),
        }
    }

    #[test]
    fn test_is_html_file_name() {
        assert!(is_html_file_name("crc32c.html"));
        assert!(is_html_file_name(".html"));
        assert!(!is_html_file_name("crc32c.HTML"));
        assert!(!is_html_file_name("crc32c.htm"));
        assert!(!is_html_file_name("crc32c.html.bak"));
        assert!(!is_html_file_name("readme.txt"));
    }

    #[test]
    fn test_merge_first_file_wins() {
        let mut builder = IndexBuilder::new().unwrap();
        builder.merge(&extraction("a.html", &["FOO", "BAR"], Some("From a.")));
        builder.merge(&extraction("b.html", &["FOO", "BAZ"], Some("From b.")));

        let (index, summary) = builder.finish();
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["FOO", "BAR", "BAZ"]);
        assert_eq!(
            index.get("FOO"),
            Some(&InstructionEntry {
                doc: "From a.".to_string(),
                file: "a.html".to_string(),
            })
        );
        assert_eq!(summary.duplicates_dropped, 1);
        assert_eq!(summary.instructions, 3);
    }

    #[test]
    fn test_merge_counts_irrelevant_files() {
        let mut builder = IndexBuilder::new().unwrap();
        builder.merge(&FileExtraction {
            file: "index.html".to_string(),
            ..FileExtraction::default()
        });
        builder.merge(&extraction("yield.html", &["YIELD"], None));

        assert!(builder.index().is_empty());
        let (_, summary) = builder.finish();
        assert_eq!(summary.files_without_section, 1);
        assert_eq!(summary.files_without_doc, 1);
        assert_eq!(summary.instructions, 0);
    }

    #[test]
    fn test_add_file_counts_failures() {
        let mut builder = IndexBuilder::new().unwrap();
        builder.add_file(Path::new("/definitely/not/here.html"));

        let (index, summary) = builder.finish();
        assert!(index.is_empty());
        assert_eq!(summary.html_files, 1);
        assert_eq!(summary.files_failed, 1);
    }
}
