//! File processing API for pastemark sources
//!
//! This module is the seam between the pure compiler and tooling that wants
//! to look at its stages: compile a source to its HTML fragment, or dump the
//! raw token stream in a human-readable or JSON form. The CLI binary is the
//! main consumer.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::markdown::compiler::Compiler;
use crate::markdown::dialect::Dialect;
use crate::markdown::{compile_markdown, normalize_newlines};

/// The output a processing run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// The compiled HTML fragment.
    Html,
    /// One line per stream element, symbols and literal runs tagged.
    TokensSimple,
    /// The raw token stream as a JSON array.
    TokensJson,
}

impl OutputFormat {
    /// Parse a format string like `"html"` or `"tokens-json"`.
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        match format_str {
            "html" => Ok(OutputFormat::Html),
            "tokens-simple" => Ok(OutputFormat::TokensSimple),
            "tokens-json" => Ok(OutputFormat::TokensJson),
            _ => Err(ProcessingError::InvalidFormat(format_str.to_string())),
        }
    }

    /// All accepted format strings.
    pub fn available_formats() -> Vec<&'static str> {
        vec!["html", "tokens-simple", "tokens-json"]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    InvalidFormat(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// Process pastemark source text according to the requested format.
///
/// The source is expected in dialect form already (CRLF line terminators,
/// HTML-escaped where the alignment directives rely on it).
pub fn process_source(source: &str, format: &OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Html => Ok(compile_markdown(source)),
        OutputFormat::TokensSimple | OutputFormat::TokensJson => {
            let engine = Compiler::new(Dialect::shipped());
            let stream = crate::markdown::lexer::lex(source, engine.symbols());
            format_stream(&stream, engine.symbols(), format)
        }
    }
}

/// Read a file, normalize its line endings to the dialect's CRLF, and
/// process it.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&normalize_newlines(&content), format)
}

/// Format a raw token stream according to the requested output format.
fn format_stream(
    stream: &[String],
    symbols: &[String],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::TokensSimple => {
            let mut result = String::new();
            for element in stream {
                let tag = if symbols.contains(element) {
                    "symbol"
                } else {
                    "text"
                };
                result.push_str(&format!("<{}:{}>\n", tag, element.escape_debug()));
            }
            Ok(result)
        }
        OutputFormat::TokensJson => serde_json::to_string_pretty(stream)
            .map_err(|e| ProcessingError::IoError(e.to_string())),
        OutputFormat::Html => unreachable!("html output is not a stream format"),
    }
}
