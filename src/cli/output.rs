//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output either as the
//! single-line JSON envelope or as human-readable text. Supports colored
//! output (respects NO_COLOR env var).

use serde::Serialize;

use crate::core::types::{FileTreeEntry, ResponseEnvelope, SymbolUsage};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for directories
    pub fn directory(s: &str) -> ColoredString {
        s.blue().bold()
    }

    /// Style for file paths
    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for symbol usage kinds
    pub fn usage(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format bytes into human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let gb_val = bytes as f64 / GB as f64;
    let mb_val = bytes as f64 / MB as f64;
    let kb_val = bytes as f64 / KB as f64;

    if bytes >= GB {
        format!("{gb_val:.1} GB")
    } else if bytes >= MB {
        format!("{mb_val:.1} MB")
    } else if bytes >= KB {
        format!("{kb_val:.1} KB")
    } else {
        format!("{bytes} B")
    }
}

/// Render a successful result as the single-line wire envelope
pub fn envelope_line<T: Serialize>(data: &T) -> Result<String, serde_json::Error> {
    let envelope = ResponseEnvelope::success(serde_json::to_value(data)?);
    serde_json::to_string(&envelope)
}

/// Print a successful result as the single-line wire envelope
pub fn print_envelope<T: Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", envelope_line(data)?);
    Ok(())
}

/// One line of the human-readable file tree, indented by depth
pub fn format_tree_entry(entry: &FileTreeEntry) -> String {
    let depth = entry.path.matches('/').count();
    let indent = "  ".repeat(depth);

    if entry.is_dir {
        format!("{indent}{}/", colors::directory(&entry.name))
    } else {
        format!(
            "{indent}{} {}",
            colors::file_path(&entry.name),
            colors::dim(&format!("({})", format_bytes(entry.size)))
        )
    }
}

/// One human-readable usage line: `file:line:column [usage] context`
pub fn format_usage(usage: &SymbolUsage) -> String {
    format!(
        "{}:{}:{} [{}] {}",
        colors::file_path(&usage.file),
        colors::number(&usage.line.to_string()),
        colors::number(&(usage.column + 1).to_string()),
        colors::usage(&usage.usage),
        usage.context
    )
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
