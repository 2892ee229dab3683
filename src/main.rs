/*!
# ARM Doc Converter CLI

`arm-doc-cvt <srcFolder> <dstFolder> <setName>`

Converts documentation on ARM instructions in HTML form into small JSON index.
*/

use anyhow::{Context, Result};
use arm_doc_cvt::cli_common::{self, CliCommand, ConvertArgs};
use arm_doc_cvt::core::ConvertOptions;
use arm_doc_cvt::docs_integration::convert_html_to_index;
use clap::Parser;
use std::time::Instant;

struct ConvertCommand {
    options: ConvertOptions,
    print: bool,
}

impl CliCommand for ConvertCommand {
    fn execute(&self) -> Result<()> {
        let started = Instant::now();

        if self.print {
            cli_common::print_info(&format!("📁 Source: {}", self.options.src_folder.display()));
            cli_common::print_info(&format!("📁 Output: {}", self.options.output_path().display()));
        }

        let summary = convert_html_to_index(&self.options).with_context(|| {
            format!(
                "Failed to convert documentation in {}",
                self.options.src_folder.display()
            )
        })?;

        if self.print {
            println!("📊 Statistics:");
            println!("   - HTML files: {}", summary.html_files);
            println!("   - Without instruction section: {}", summary.files_without_section);
            println!("   - Without doc paragraph: {}", summary.files_without_doc);
            println!("   - Duplicate names dropped: {}", summary.duplicates_dropped);
            println!("   - Instructions: {}", summary.instructions);
            println!(
                "   - Duration: {}",
                cli_common::format_duration(started.elapsed())
            );
            if summary.files_failed > 0 {
                cli_common::print_warning(&format!(
                    "{} file(s) could not be converted, see log",
                    summary.files_failed
                ));
            }
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "arm-doc-cvt"
    }

    fn description(&self) -> &str {
        "Converts documentation on ARM instructions in HTML form into small JSON index"
    }

    fn quiet(&self) -> bool {
        !self.print
    }
}

fn main() -> Result<()> {
    let args = ConvertArgs::parse();

    // Настраиваем логирование
    cli_common::init_logging(args.common.log_level());

    let options = args.to_options();

    cli_common::run_command(ConvertCommand {
        options,
        print: args.common.should_print(),
    })
}
