//! Output formatting for treedoc results.
//!
//! Provides functions to format a [`DocumentResult`] into Markdown, plain text, or JSON.
//! The Markdown form is the primary document: a top-level heading, a fenced
//! `Folder Structure` section, and a `File Contents` section with one block
//! per collected file.

use crate::{DocumentResult, FileStatus, TreedocError};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Text,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the treedoc result into a string.
///
/// `pretty` only affects JSON output.
pub fn format_result(result: &DocumentResult, format: OutputFormat, pretty: bool) -> String {
    match format {
        OutputFormat::Markdown => format_markdown(result),
        OutputFormat::Text => format_text(result),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Writes the formatted result to a file.
pub fn write_result_to_file(
    result: &DocumentResult,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), TreedocError> {
    let content = format_result(result, format, pretty);
    fs::write(&path, content).map_err(|e| TreedocError::io(path.as_ref(), e))?;
    Ok(())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(result: &DocumentResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(&format!("# {} - Project Documentation\n\n", result.root_name));

    out.push_str("## Folder Structure\n\n```\n");
    out.push_str(&result.tree);
    if !result.tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("```\n\n## File Contents\n\n");

    for file in &result.files {
        out.push_str(&format!("### {}\n\n", file.path.display()));
        match &file.status {
            FileStatus::Included => {
                let ext = file.path.extension().and_then(|e| e.to_str()).unwrap_or("");
                let content = file.content.as_deref().unwrap_or("");
                out.push_str(&format!("```{}\n", language_from_extension(ext)));
                out.push_str(content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n\n");
            }
            FileStatus::TooLarge { size } => {
                out.push_str(&format!("[File too large: {} bytes - skipped]\n\n", size));
            }
            FileStatus::Unreadable { reason } => {
                out.push_str(&format!("[Could not read file: {}]\n\n", reason));
            }
        }
    }
    out
}

fn format_text(result: &DocumentResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("Folder Structure:\n");
    out.push_str(&result.tree);
    if !result.tree.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("\nFile Contents:\n");

    for file in &result.files {
        out.push_str(&format!("\n--- {} ---\n", file.path.display()));
        match &file.status {
            FileStatus::Included => {
                let content = file.content.as_deref().unwrap_or("");
                out.push_str(content);
                if !content.ends_with('\n') {
                    out.push('\n');
                }
            }
            FileStatus::TooLarge { size } => {
                out.push_str(&format!("[File too large: {} bytes - skipped]\n", size));
            }
            FileStatus::Unreadable { reason } => {
                out.push_str(&format!("[Could not read file: {}]\n", reason));
            }
        }
    }
    out
}

fn format_json(result: &DocumentResult, pretty: bool) -> String {
    if pretty {
        serde_json::to_string_pretty(result).expect("JSON serialization failed")
    } else {
        serde_json::to_string(result).expect("JSON serialization failed")
    }
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "rs" => "rust", "toml" => "toml", "json" => "json", "md" | "markdown" => "markdown",
        "txt" => "text", "html" | "htm" => "html", "css" => "css", "js" => "javascript",
        "ts" => "typescript", "py" => "python", "sh" | "bash" => "bash",
        "yml" | "yaml" => "yaml", "xml" => "xml", "sql" => "sql", "ini" | "cfg" => "ini",
        "c" => "c", "cpp" | "cc" | "cxx" => "cpp", "h" => "c", "hpp" => "cpp",
        "go" => "go", "rb" => "ruby", "java" => "java", "php" => "php", "swift" => "swift",
        "kt" | "kts" => "kotlin", "scala" => "scala", "dart" => "dart",
        _ => "",
    }
}
