//! # pastemark
//!
//! A compiler for the pastemark markup dialect.
//!
//! Pastemark is the small, ambiguous, deliberately non-standard markup
//! grammar used by paste-sharing pages: headers, emphasis variants,
//! underline, strike-through, text-alignment directives, horizontal rules
//! and line/paragraph breaks. The compiler turns a raw text string into an
//! HTML fragment and nothing else; it performs no I/O and holds no state
//! across calls.
//!
//! The main entry point is [compile_markdown].

pub mod markdown;

pub use markdown::compile_markdown;
