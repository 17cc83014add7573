//! Compiler for the pastemark markup dialect
//!
//! This module orchestrates the complete compilation pipeline for pastemark.
//!
//! Structure:
//!
//!     The compiler runs two staged passes over one immutable grammar table:
//!
//!     Lexing:
//!         The raw input is split into a raw token stream, a flat sequence of
//!         strings where each element is either exactly one registered symbol
//!         (`**`, `-&gt;`, `\r\n\r\n`, ...) or a maximal run of literal text.
//!         Splitting is greedy longest-match-first so a three-character symbol
//!         is never broken up by its shorter prefixes. See [lexer].
//!
//!     Matching:
//!         The stream is walked left to right, pairing each opening symbol
//!         with the nearest occurrence of its closing symbol and recursively
//!         recompiling the enclosed content. Anything that fails to pair
//!         passes through as literal text; malformed markup never fails, it
//!         just renders as-is. See [compiler].
//!
//! The dialect itself (which symbols exist and what HTML they compile to)
//! lives in [dialect]. Registration order there is load-bearing: it doubles
//! as grammar precedence during matching.

pub mod compiler;
pub mod dialect;
pub mod lexer;
pub mod processor;
pub mod token;

pub use compiler::Compiler;
pub use dialect::Dialect;
pub use lexer::lex;
pub use token::TokenDefinition;

use dialect::PARAGRAPH_BREAK;
use once_cell::sync::Lazy;

/// Shared engine for the shipped dialect. The dialect never mutates after
/// construction, so one instance serves every call on every thread.
static COMPILER: Lazy<Compiler> = Lazy::new(|| Compiler::new(Dialect::shipped()));

/// Compile raw pastemark text into an HTML fragment.
///
/// This is the driver consumed by the surrounding application. It appends one
/// paragraph terminator before lexing: upstream form handling strips the final
/// line terminator of real input, and without it a trailing header or
/// paragraph would never find its closing symbol.
///
/// Total over any input string; malformed markup degrades to literal
/// passthrough instead of failing.
pub fn compile_markdown(text: &str) -> String {
    COMPILER.compile(&format!("{text}{PARAGRAPH_BREAK}"))
}

/// Normalize bare `\n` line endings to the `\r\n` the dialect is defined in.
///
/// Web form input arrives CRLF-terminated already; this is for callers (such
/// as the CLI) that read LF files from disk. Existing `\r\n` pairs are left
/// untouched.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\n', "\r\n")
}
