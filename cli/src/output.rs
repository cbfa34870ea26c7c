//! Harness output helpers for consistent formatting.

use colored::Colorize;

pub fn heading(text: &str) -> String {
    format!("{}", text.bright_cyan())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn status_ok() -> String {
    format!("{}", "OK".green())
}

pub fn status_fail() -> String {
    format!("{}", "FAIL".red())
}

pub fn passed_label() -> String {
    format!("{}", "PASSED".green())
}

pub fn failed_label() -> String {
    format!("{}", "FAILED".red())
}

pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error:".red().bold(), text)
}
