/*!
# Documentation Integration Module

Конвертация HTML документации ARM по инструкциям в компактный JSON индекс.

## Основные компоненты

- `char_class` - ASCII предикаты для разбора имён инструкций
- `InstructionExtractor` - Извлечение имён и описания из одной HTML страницы
- `InstructionIndex` - Индекс имя → `{doc, file}`, сериализуемый в JSON
- `IndexBuilder` - Обход папки и слияние результатов (первый файл побеждает)

## Использование

```rust,ignore
use arm_doc_cvt::core::ConvertOptions;
use arm_doc_cvt::docs_integration::convert_html_to_index;

let options = ConvertOptions::new("./ISA_A64_xml", "./out", "a64");
let summary = convert_html_to_index(&options)?;
println!("Instructions: {}", summary.instructions);
```
*/

pub mod char_class;
pub mod index_builder;
pub mod instruction_extractor;
pub mod instruction_index;

pub use index_builder::{
    build_index, convert_html_to_index, is_html_file_name, ConversionSummary, IndexBuilder,
};
pub use instruction_extractor::{
    clean_doc, tokenize_instruction_names, FileExtraction, InstructionExtractor,
    INSTRUCTION_SECTION_CLASS, SUPPLEMENTARY_PARAGRAPH_CLASS,
};
pub use instruction_index::{InstructionEntry, InstructionIndex};
