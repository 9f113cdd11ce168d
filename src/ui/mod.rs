// file: src/ui/mod.rs
// version: 1.0.0
// guid: f1c7a4e9-3b8d-4c2f-a6e1-9d5b0f3c8a67

//! User-facing outcome messages
//!
//! Command outcomes go to the console through these helpers, not the log
//! stream; the log stream is for diagnostics and is filtered by verbosity.

use colored::Colorize;

/// Report a successful operation
pub fn success(message: &str) {
    println!("{} {}", "+".green().bold(), message);
}

/// Report a failed operation
pub fn failure(message: &str) {
    eprintln!("{} {}", "-".red().bold(), message);
}

/// Report a warning
pub fn warning(message: &str) {
    eprintln!("{} {}", "?".yellow().bold(), message);
}
