//! Общий модуль для CLI
//!
//! Содержит общую функциональность бинарника конвертера:
//! - Инициализация логирования
//! - Обработка ошибок
//! - Форматирование вывода

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub mod args;

pub use args::{CommonArgs, ConvertArgs};

/// Инициализирует систему логирования; `RUST_LOG` дополняет уровень из флагов
pub fn init_logging(level: tracing::Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();
}

/// Выводит заголовок CLI утилиты
pub fn print_header(name: &str, version: &str, description: &str) {
    println!(
        "{} {} - {}",
        "🔧".blue(),
        name.bold().blue(),
        version.dimmed()
    );
    println!("{}\n", description.dimmed());
}

/// Выводит успешное завершение операции
pub fn print_success(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Выводит предупреждение
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message.yellow());
}

/// Выводит ошибку
pub fn print_error(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red());
}

/// Выводит информационное сообщение
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ️".blue(), message);
}

/// Форматирует продолжительность в человекочитаемый вид
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs == 0 {
        format!("{}ms", millis)
    } else if secs < 60 {
        format!("{}.{:03}s", secs, millis)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// Trait для CLI команд
pub trait CliCommand {
    /// Выполняет команду
    fn execute(&self) -> Result<()>;

    /// Возвращает имя команды
    fn name(&self) -> &str;

    /// Возвращает описание команды
    fn description(&self) -> &str;

    /// Подавлять ли заголовок и итоговое сообщение
    fn quiet(&self) -> bool {
        false
    }
}

/// Запускает CLI команду с обработкой ошибок
pub fn run_command<C: CliCommand>(command: C) -> Result<()> {
    if !command.quiet() {
        print_header(
            command.name(),
            env!("CARGO_PKG_VERSION"),
            command.description(),
        );
    }

    match command.execute() {
        Ok(()) => {
            if !command.quiet() {
                print_success(&format!("{} completed successfully", command.name()));
            }
            Ok(())
        }
        Err(e) => {
            print_error(&format!("{} failed: {}", command.name(), e));
            Err(e)
        }
    }
}
