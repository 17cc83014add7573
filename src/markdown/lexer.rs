//! Lexing pass: split raw text into the raw token stream
//!
//! The raw token stream is a flat `Vec<String>` in which each element is
//! either exactly one registered symbol or a maximal run of literal text.
//! No type tag distinguishes the two; the matcher re-derives symbol-ness by
//! string equality against the grammar table. Splitting the stream up front
//! makes the matching pass a plain walk over whole elements instead of
//! byte-offset bookkeeping.
//!
//! Losslessness is the one hard guarantee here: concatenating the stream in
//! order reproduces the input exactly. The property test in
//! `tests/lexer_proptest.rs` holds the lexer to it.

/// Split `raw` into literal runs and symbol elements.
///
/// `symbols` must be sorted by descending length (see
/// [Dialect::symbols](crate::markdown::dialect::Dialect::symbols)); the scan
/// takes the first symbol that matches at the cursor, which under that order
/// is the longest one. The cursor only ever advances past a whole symbol or a
/// whole character, so slicing stays on char boundaries for any UTF-8 input.
pub fn lex(raw: &str, symbols: &[String]) -> Vec<String> {
    let mut stream: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut cursor = 0;

    while cursor < raw.len() {
        let rest = &raw[cursor..];
        let matched = symbols
            .iter()
            .find(|s| !s.is_empty() && rest.starts_with(s.as_str()));
        if let Some(symbol) = matched {
            if !buffer.is_empty() {
                stream.push(std::mem::take(&mut buffer));
            }
            stream.push(symbol.clone());
            cursor += symbol.len();
        } else if let Some(ch) = rest.chars().next() {
            buffer.push(ch);
            cursor += ch.len_utf8();
        } else {
            break;
        }
    }

    if !buffer.is_empty() {
        stream.push(buffer);
    }

    stream
}
