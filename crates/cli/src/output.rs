//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Color status based on value
pub fn color_status(status: &str) -> String {
    match status.to_uppercase().as_str() {
        "RUNNING" | "ACTIVE" | "READY" => status.green().to_string(),
        "PENDING" | "WAITING" => status.yellow().to_string(),
        "CRASHED" | "TERMINATED" | "STOPPED" => status.red().to_string(),
        _ => status.to_string(),
    }
}
