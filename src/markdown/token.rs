//! Token definitions for the pastemark dialect
//!
//! A token definition is one grammar rule: the raw symbol(s) that delimit a
//! span in the source text, and the HTML emitted around the (optionally
//! recompiled) content. Definitions are immutable once registered in a
//! [Dialect](crate::markdown::dialect::Dialect).
//!
//! There are exactly two kinds of rule:
//!
//!     Enclosing:
//!         An opening symbol paired with a closing symbol. The matcher pairs
//!         the opening with the nearest later occurrence of the closing and
//!         substitutes the compiled markup around the enclosed content.
//!
//!     Marker:
//!         A single zero-width symbol with no closing counterpart. It is
//!         consumed in place and always emits the same fixed markup,
//!         regardless of surrounding content (paragraph breaks, horizontal
//!         rules).

use serde::Serialize;

/// One grammar rule of the dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TokenDefinition {
    /// A pair of symbols delimiting a span of content.
    Enclosing {
        raw_opening: String,
        raw_closing: String,
        compiled_opening: String,
        /// `None` means no trailing markup is emitted.
        compiled_closing: Option<String>,
        /// When false, the enclosed raw content is discarded and only the
        /// compiled opening/closing markup is emitted.
        encloses_content: bool,
    },
    /// A zero-width symbol consumed in place.
    Marker { raw_symbol: String, compiled: String },
}

impl TokenDefinition {
    /// An enclosing rule that keeps (and recompiles) its content.
    pub fn enclosing(
        raw_opening: &str,
        raw_closing: &str,
        compiled_opening: &str,
        compiled_closing: &str,
    ) -> Self {
        TokenDefinition::Enclosing {
            raw_opening: raw_opening.to_string(),
            raw_closing: raw_closing.to_string(),
            compiled_opening: compiled_opening.to_string(),
            compiled_closing: Some(compiled_closing.to_string()),
            encloses_content: true,
        }
    }

    /// A zero-width marker rule.
    pub fn marker(raw_symbol: &str, compiled: &str) -> Self {
        TokenDefinition::Marker {
            raw_symbol: raw_symbol.to_string(),
            compiled: compiled.to_string(),
        }
    }

    /// The symbol that starts (or, for markers, entirely makes up) this rule.
    pub fn raw_opening(&self) -> &str {
        match self {
            TokenDefinition::Enclosing { raw_opening, .. } => raw_opening,
            TokenDefinition::Marker { raw_symbol, .. } => raw_symbol,
        }
    }

    /// The closing symbol, if this rule has one.
    pub fn raw_closing(&self) -> Option<&str> {
        match self {
            TokenDefinition::Enclosing { raw_closing, .. } => Some(raw_closing),
            TokenDefinition::Marker { .. } => None,
        }
    }

    /// Emit the compiled markup for this rule around `content`.
    ///
    /// Markers and non-enclosing rules ignore `content` entirely.
    pub fn render(&self, content: &str) -> String {
        match self {
            TokenDefinition::Enclosing {
                compiled_opening,
                compiled_closing,
                encloses_content,
                ..
            } => {
                let mut html = compiled_opening.clone();
                if *encloses_content {
                    html.push_str(content);
                }
                if let Some(closing) = compiled_closing {
                    html.push_str(closing);
                }
                html
            }
            TokenDefinition::Marker { compiled, .. } => compiled.clone(),
        }
    }
}
