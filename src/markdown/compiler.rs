//! Matching pass: pair symbols and emit the HTML fragment
//!
//! The matcher walks the raw token stream with an explicit cursor. At each
//! unconsumed position it tries the grammar table in registration order:
//!
//!     Marker definitions consume exactly their one stream element and emit
//!     fixed markup.
//!
//!     Enclosing definitions scan forward for the *nearest* later element
//!     equal to their closing symbol. This is deliberately not a balanced
//!     search: a second occurrence of the opening symbol before the closer
//!     does not nest, it is ordinary content. The enclosed content is the
//!     literal concatenation of everything strictly between opener and
//!     closer, including symbol elements that end up pairing with nothing.
//!     If that concatenation still contains a registered symbol, the whole
//!     lex-and-match pipeline recurses on it before substitution; that is how
//!     bold inside a header resolves.
//!
//! A definition whose closing symbol never appears simply does not apply at
//! this position and the next definition gets a try. When nothing applies the
//! element is emitted verbatim. There is no error path: unbalanced or
//! malformed markup renders as literal text, because a paste must still
//! render, not break the page.
//!
//! Termination: the top-level walk consumes at least one element per step.
//! The recursion on enclosed content always operates on a strictly shorter
//! input (the opener and closer are excluded), so depth is bounded by input
//! length. Callers worried about pathological inputs impose their own input
//! size cap; the engine has none.

use crate::markdown::dialect::Dialect;
use crate::markdown::lexer::lex;
#[cfg(test)]
use crate::markdown::token::TokenDefinition;

/// The compiler engine: one immutable dialect plus its precomputed,
/// length-sorted symbol set.
///
/// Construction is the only stateful moment; afterwards the engine is a pure
/// function of its input and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Compiler {
    dialect: Dialect,
    symbols: Vec<String>,
}

impl Compiler {
    pub fn new(dialect: Dialect) -> Self {
        let symbols = dialect.symbols();
        Compiler { dialect, symbols }
    }

    /// The dialect this engine compiles.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// The length-sorted symbol set the lexing pass scans with.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Compile raw text to an HTML fragment: lex, then match.
    ///
    /// Note that this does not append the driver terminator; use
    /// [compile_markdown](crate::markdown::compile_markdown) for input whose
    /// final line terminator was stripped upstream.
    pub fn compile(&self, raw: &str) -> String {
        let stream = lex(raw, &self.symbols);
        self.substitute(&stream)
    }

    /// The matching pass proper.
    fn substitute(&self, stream: &[String]) -> String {
        let mut html = String::new();
        let mut cursor = 0;

        while cursor < stream.len() {
            match self.match_at(stream, cursor) {
                Some((fragment, consumed)) => {
                    html.push_str(&fragment);
                    cursor += consumed;
                }
                None => {
                    html.push_str(&stream[cursor]);
                    cursor += 1;
                }
            }
        }

        html
    }

    /// Try every definition in registration order at `cursor`. Returns the
    /// rendered fragment and how many stream elements it consumed, or `None`
    /// when the position falls through as literal text.
    fn match_at(&self, stream: &[String], cursor: usize) -> Option<(String, usize)> {
        for definition in self.dialect.definitions() {
            if definition.raw_opening() != stream[cursor] {
                continue;
            }

            let Some(closing) = definition.raw_closing() else {
                // zero-width marker: consume the one element
                return Some((definition.render(""), 1));
            };

            // nearest close, not balanced
            let Some(close_at) = stream[cursor + 1..]
                .iter()
                .position(|element| element == closing)
                .map(|offset| cursor + 1 + offset)
            else {
                // no closer anywhere ahead: this definition does not apply,
                // but a later one still might
                continue;
            };

            let content = self.enclosed_content(&stream[cursor + 1..close_at]);
            return Some((definition.render(&content), close_at + 1 - cursor));
        }

        None
    }

    /// Concatenate the elements between an opener and its closer, recursing
    /// through the whole pipeline when uncompiled markup remains inside.
    fn enclosed_content(&self, enclosed: &[String]) -> String {
        let content = enclosed.concat();
        if self.contains_symbol(&content) {
            self.compile(&content)
        } else {
            content
        }
    }

    fn contains_symbol(&self, text: &str) -> bool {
        self.symbols.iter().any(|symbol| text.contains(symbol.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> Compiler {
        Compiler::new(Dialect::shipped())
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(engine().compile("just plain text"), "just plain text");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(engine().compile(""), "");
    }

    #[test]
    fn test_simple_emphasis() {
        assert_eq!(engine().compile("*a*"), "<em>a</em>");
        assert_eq!(engine().compile("**b**"), "<strong>b</strong>");
        assert_eq!(engine().compile("__u__"), "<u>u</u>");
        assert_eq!(engine().compile("~~s~~"), "<s>s</s>");
    }

    #[test]
    fn test_bold_italic_symbol_is_atomic() {
        assert_eq!(
            engine().compile("***both***"),
            "<strong><em>both</em></strong>"
        );
    }

    #[test]
    fn test_nearest_close_does_not_nest() {
        // tokens: * a * b * c * — the second star closes the first, the
        // fourth closes the third
        assert_eq!(engine().compile("*a*b*c*"), "<em>a</em>b<em>c</em>");
    }

    #[test]
    fn test_unmatched_opener_is_literal() {
        assert_eq!(engine().compile("*a"), "*a");
        assert_eq!(engine().compile("**a"), "**a");
    }

    #[test]
    fn test_lone_symbols_are_literal() {
        assert_eq!(engine().compile("****"), "****");
        assert_eq!(engine().compile("~~"), "~~");
    }

    #[test]
    fn test_recursive_nesting() {
        assert_eq!(
            engine().compile("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn test_unpaired_symbol_inside_content_stays_literal() {
        // the ** inside never pairs, so it concatenates into the content
        assert_eq!(engine().compile("*a**b*"), "<em>a**b</em>");
    }

    #[test]
    fn test_empty_enclosed_content() {
        // needs a dialect without `**`, which in the shipped dialect
        // swallows both stars as one symbol
        let mut dialect = Dialect::new();
        dialect.register(TokenDefinition::enclosing("*", "*", "<em>", "</em>"));
        assert_eq!(Compiler::new(dialect).compile("**"), "<em></em>");
    }

    #[test]
    fn test_header_requires_closing_terminator() {
        assert_eq!(
            engine().compile("# Title\r\n\r\n"),
            "<h1 style=\"font-size: 3.5rem\">Title</h1><br>"
        );
        // no terminator anywhere: literal passthrough
        assert_eq!(engine().compile("# Title"), "# Title");
    }

    #[test]
    fn test_all_header_levels() {
        for (level, size) in [
            (1, "3.5"),
            (2, "2.25"),
            (3, "1.75"),
            (4, "1.35"),
            (5, "1.25"),
            (6, "1.15"),
        ] {
            let raw = format!("{} Title\r\n\r\n", "#".repeat(level));
            assert_eq!(
                engine().compile(&raw),
                format!("<h{level} style=\"font-size: {size}rem\">Title</h{level}><br>")
            );
        }
    }

    #[test]
    fn test_bold_inside_header() {
        assert_eq!(
            engine().compile("# a **b**\r\n\r\n"),
            "<h1 style=\"font-size: 3.5rem\">a <strong>b</strong></h1><br>"
        );
    }

    #[test]
    fn test_horizontal_rule_both_spellings() {
        assert_eq!(engine().compile("a\r\n---\r\nb"), "a<hr>b");
        assert_eq!(engine().compile("a\r\n***\r\nb"), "a<hr>b");
    }

    #[test]
    fn test_paragraph_and_line_breaks() {
        assert_eq!(engine().compile("a\r\n\r\nb"), "a<br>b");
        assert_eq!(engine().compile("a\r\nb"), "a b");
    }

    #[test]
    fn test_right_alignment() {
        assert_eq!(
            engine().compile("-&gt;right-&gt;"),
            "<div style=\"text-align: right;\">right</div>"
        );
    }

    #[test]
    fn test_center_alignment() {
        // the right-align definition is tried first but finds no second
        // -&gt; to close with, so the center-align definition wins
        assert_eq!(
            engine().compile("-&gt;middle&lt;-"),
            "<div style=\"text-align: center;\">middle</div>"
        );
    }

    #[test]
    fn test_alignment_precedence_on_ambiguous_closer() {
        // both a -&gt; and a &lt;- closer are ahead; right-align is
        // registered first and finds its closer, so it wins the span and the
        // &lt;- falls through as literal text
        assert_eq!(
            engine().compile("-&gt;a-&gt;b&lt;-"),
            "<div style=\"text-align: right;\">a</div>b&lt;-"
        );
    }
}
