//! Output formatting for the `orgit` command line.
//!
//! Results (URLs, link text) go to stdout undecorated so they can be piped
//! into other tools. Errors and informational lines are styled with
//! `colored`: red for errors, blue for labels, bright_black for secondary
//! text.

use colored::*;

/// Prints an error message
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints a `label: value` line with the label highlighted
pub fn print_field(label: &str, value: &str) {
    println!("{} {}", format!("{label}:").blue(), value.white());
}

/// Prints a secondary, muted line
pub fn print_note(message: &str) {
    println!("{}", message.bright_black());
}
