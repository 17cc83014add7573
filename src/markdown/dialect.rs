//! The grammar table and the shipped pastemark dialect
//!
//! A [Dialect] is an ordered sequence of [TokenDefinition]s. The order is
//! semantically load-bearing in two places:
//!
//! - During matching, definitions are tried in registration order, so
//!   registration order doubles as grammar precedence. This is what decides
//!   which alignment directive wins when two definitions share the same
//!   opening symbol but differ in closing symbol.
//! - During lexing, ties between equal-length symbols resolve by first
//!   registration (the length sort is stable).
//!
//! The shipped dialect is fixed at construction time and shared immutably; it
//! is defined in terms of CRLF line terminators because that is what the
//! surrounding web forms submit, and in terms of the *escaped* arrow
//! sequences (`-&gt;`, `&lt;-`) because the caller HTML-escapes user input
//! before compiling.

use serde::Serialize;

use crate::markdown::token::TokenDefinition;

/// A single line terminator as the dialect spells it.
pub const LINE_BREAK: &str = "\r\n";

/// A double line terminator: paragraph break, and the closing symbol for
/// headers.
pub const PARAGRAPH_BREAK: &str = "\r\n\r\n";

/// Font size in rem for a heading level.
///
/// Levels outside 1..=6 are a programmer error: the shipped dialect only ever
/// registers levels 1 through 6, so this is unreachable from compiler input.
pub fn heading_font_size(level: usize) -> &'static str {
    match level {
        1 => "3.5",
        2 => "2.25",
        3 => "1.75",
        4 => "1.35",
        5 => "1.25",
        6 => "1.15",
        _ => panic!("heading level {level} outside 1..=6"),
    }
}

/// An ordered grammar table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct Dialect {
    definitions: Vec<TokenDefinition>,
}

impl Dialect {
    /// An empty dialect with no registered definitions.
    pub fn new() -> Self {
        Dialect {
            definitions: Vec::new(),
        }
    }

    /// Append a definition. Registration order is precedence; definitions
    /// cannot be removed or reordered once registered.
    ///
    /// Panics on an empty opening symbol: a zero-width symbol would never
    /// advance the lexer cursor, and registering one is a programmer error.
    pub fn register(&mut self, definition: TokenDefinition) {
        assert!(
            !definition.raw_opening().is_empty(),
            "token definition opening symbol must be non-empty"
        );
        self.definitions.push(definition);
    }

    /// The registered definitions, in registration order.
    pub fn definitions(&self) -> &[TokenDefinition] {
        &self.definitions
    }

    /// The distinct symbols of the dialect, sorted by descending length.
    ///
    /// This is the symbol set the lexer scans with. The descending length
    /// sort guarantees greedy longest-match-first splitting (`***` is
    /// recognized before `**` before `*`); the sort is stable, so
    /// equal-length symbols keep their first-registration order.
    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for definition in &self.definitions {
            let opening = definition.raw_opening();
            if !symbols.iter().any(|s| s == opening) {
                symbols.push(opening.to_string());
            }
            if let Some(closing) = definition.raw_closing() {
                if !symbols.iter().any(|s| s == closing) {
                    symbols.push(closing.to_string());
                }
            }
        }
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        symbols
    }

    /// The shipped pastemark dialect.
    ///
    /// Registration order here is pinned by regression tests; in particular
    /// the right-align directive must stay registered before the center-align
    /// directive, because both open with `-&gt;`.
    pub fn shipped() -> Self {
        let mut dialect = Dialect::new();

        // headers: `# ` through `###### `, closed by a paragraph break
        for level in 1..=6 {
            dialect.register(TokenDefinition::enclosing(
                &format!("{} ", "#".repeat(level)),
                PARAGRAPH_BREAK,
                &format!(
                    "<h{level} style=\"font-size: {}rem\">",
                    heading_font_size(level)
                ),
                &format!("</h{level}><br>"),
            ));
        }

        // text formatting
        dialect.register(TokenDefinition::enclosing("*", "*", "<em>", "</em>"));
        dialect.register(TokenDefinition::enclosing("**", "**", "<strong>", "</strong>"));
        dialect.register(TokenDefinition::enclosing(
            "***",
            "***",
            "<strong><em>",
            "</em></strong>",
        ));
        dialect.register(TokenDefinition::enclosing("__", "__", "<u>", "</u>"));
        dialect.register(TokenDefinition::enclosing("~~", "~~", "<s>", "</s>"));

        // text alignment, in terms of the escaped arrow sequences
        dialect.register(TokenDefinition::enclosing(
            "-&gt;",
            "-&gt;",
            "<div style=\"text-align: right;\">",
            "</div>",
        ));
        dialect.register(TokenDefinition::enclosing(
            "-&gt;",
            "&lt;-",
            "<div style=\"text-align: center;\">",
            "</div>",
        ));

        // horizontal rule, two surface spellings, both flanked by terminators
        dialect.register(TokenDefinition::marker("\r\n---\r\n", "<hr>"));
        dialect.register(TokenDefinition::marker("\r\n***\r\n", "<hr>"));

        // line structure
        dialect.register(TokenDefinition::marker(PARAGRAPH_BREAK, "<br>"));
        dialect.register(TokenDefinition::marker(LINE_BREAK, " "));

        dialect
    }
}
