/*!
# Instruction Extractor

Извлекает имена инструкций и краткое описание из HTML страниц документации
ARM (XHTML exploration tools).

Each page is a document for display, not an API with a known structure, so
the extraction is a set of layout heuristics:

```html
<h2 class="instruction-section">CRC32C</h2>
<p>CRC32 checksum performs a cyclic redundancy check ...</p>
<p class=".aml">This instruction is mandatory in Armv8.1 ...</p>
```

- instruction names are the uppercase/digit runs at the start of the
  `.instruction-section` heading (one page may document several
  instructions, e.g. `LDADD, LDADDA, LDADDAL`);
- the doc blurb is the next sibling element, plus the following
  `<p class=".aml">` if present.

## Использование

```rust,ignore
let extractor = InstructionExtractor::new()?;
let extraction = extractor.extract_file(Path::new("html/crc32c.html"))?;
for (name, entry) in extraction.entries() {
    println!("{name}: {}", entry.doc);
}
```
*/

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::path::Path;

use super::char_class::{is_decimal_digit, is_lowercase_letter, is_uppercase_letter};
use super::instruction_index::InstructionEntry;
use crate::core::{base_file_name, read_html_file, ConvertError, ConvertResult};

/// Class of the heading that names the documented instruction(s)
pub const INSTRUCTION_SECTION_CLASS: &str = "instruction-section";

/// Literal `class` value of the optional supplementary paragraph
pub const SUPPLEMENTARY_PARAGRAPH_CLASS: &str = ".aml";

const THIS_MEANS_SUFFIX: &str = "This means:";
const SEE_ALSO_SUFFIX: &str = "See also";

/// What one HTML page contributed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileExtraction {
    /// Base file name of the page
    pub file: String,
    /// Whether the page has an `.instruction-section` heading at all
    pub has_section: bool,
    /// Candidate instruction names in heading order
    pub names: Vec<String>,
    /// Cleaned doc blurb; `None` when the heading has no usable sibling
    pub doc: Option<String>,
}

impl FileExtraction {
    fn without_section(file: &str) -> Self {
        Self {
            file: file.to_string(),
            ..Self::default()
        }
    }

    /// Index entries for every name, all sharing the same doc and file.
    /// Empty when no doc was found.
    pub fn entries(&self) -> impl Iterator<Item = (&str, InstructionEntry)> + '_ {
        let doc = self.doc.as_deref();
        self.names.iter().filter_map(move |name| {
            doc.map(|doc| {
                (
                    name.as_str(),
                    InstructionEntry {
                        doc: doc.to_string(),
                        file: self.file.clone(),
                    },
                )
            })
        })
    }
}

/// Извлекатель данных об инструкциях из HTML документации
pub struct InstructionExtractor {
    section_selector: Selector,
}

impl InstructionExtractor {
    pub fn new() -> ConvertResult<Self> {
        let selector = format!(".{}", INSTRUCTION_SECTION_CLASS);
        let section_selector =
            Selector::parse(&selector).map_err(|e| ConvertError::Selector {
                selector: selector.clone(),
                message: e.to_string(),
            })?;
        Ok(Self { section_selector })
    }

    /// Reads and parses one page from disk.
    pub fn extract_file(&self, path: &Path) -> ConvertResult<FileExtraction> {
        let html = read_html_file(path)?;
        Ok(self.extract_html(&html, &base_file_name(path)))
    }

    pub fn extract_html(&self, html: &str, file_name: &str) -> FileExtraction {
        let document = Html::parse_document(html);
        self.extract_document(&document, file_name)
    }

    /// Применяет эвристики к уже разобранному документу
    pub fn extract_document(&self, document: &Html, file_name: &str) -> FileExtraction {
        let Some(section) = document.select(&self.section_selector).next() else {
            // Probably not an instruction page
            tracing::debug!("No '.{}' in {}", INSTRUCTION_SECTION_CLASS, file_name);
            return FileExtraction::without_section(file_name);
        };

        let names = tokenize_instruction_names(&element_text(section));
        let doc = collect_doc(section).filter(|doc| !doc.is_empty());

        if doc.is_none() {
            tracing::warn!(
                "Unable to find instruction information in {}. No sibling for '.{}'",
                file_name,
                INSTRUCTION_SECTION_CLASS
            );
        } else if names.is_empty() {
            tracing::debug!("No instruction names in the heading of {}", file_name);
        }

        FileExtraction {
            file: file_name.to_string(),
            has_section: true,
            names,
            doc,
        }
    }
}

/// Splits heading text into instruction names.
///
/// Uppercase letters and digits build a name (`VREV32`), any other character
/// ends it, and the first lowercase letter ends the whole scan: in
/// `"ABCxyz DEF"` only `ABC` is found.
pub fn tokenize_instruction_names(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut name = String::new();

    for ch in text.chars() {
        if is_lowercase_letter(ch) {
            break;
        }

        if is_uppercase_letter(ch) || is_decimal_digit(ch) {
            name.push(ch);
        } else if !name.is_empty() {
            names.push(std::mem::take(&mut name));
        }
    }

    if !name.is_empty() {
        names.push(name);
    }
    names
}

/// Strips the template's trailing boilerplate: `This means:` first, then `See also`.
pub fn clean_doc(doc: &str) -> String {
    let mut doc = doc;
    if let Some(stripped) = doc.strip_suffix(THIS_MEANS_SUFFIX) {
        doc = stripped.trim();
    }
    if let Some(stripped) = doc.strip_suffix(SEE_ALSO_SUFFIX) {
        doc = stripped.trim();
    }
    doc.to_string()
}

/// Первый абзац после заголовка и, если есть, дополнительный `<p class=".aml">`
fn collect_doc(section: ElementRef<'_>) -> Option<String> {
    let primary = next_element_sibling(section)?;
    let mut doc = element_text(primary);

    if let Some(secondary) = next_element_sibling(primary).filter(is_supplementary_paragraph) {
        let extra = element_text(secondary);
        if !extra.is_empty() {
            doc = format!("{}\n\n{}", doc, extra).trim().to_string();
        }
    }

    Some(clean_doc(&doc))
}

fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn is_supplementary_paragraph(element: &ElementRef<'_>) -> bool {
    element.value().name() == "p"
        && element.value().attr("class") == Some(SUPPLEMENTARY_PARAGRAPH_CLASS)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
