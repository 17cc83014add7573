//! Integration tests for inline formatting spans
//!
//! These exercise the engine directly (no driver terminator appended) so the
//! inputs below are compiled exactly as written. Each case pins the exact
//! HTML fragment, including the literal-passthrough behavior for malformed
//! spans.

use rstest::rstest;

use pastemark::markdown::{Compiler, Dialect};

fn engine() -> Compiler {
    Compiler::new(Dialect::shipped())
}

#[rstest]
#[case("*italic*", "<em>italic</em>")]
#[case("**bold**", "<strong>bold</strong>")]
#[case("***both***", "<strong><em>both</em></strong>")]
#[case("__underline__", "<u>underline</u>")]
#[case("~~strike~~", "<s>strike</s>")]
fn test_simple_spans(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(engine().compile(input), expected);
}

#[rstest]
#[case("before *mid* after", "before <em>mid</em> after")]
#[case("a **b** c **d** e", "a <strong>b</strong> c <strong>d</strong> e")]
#[case("__a__~~b~~", "<u>a</u><s>b</s>")]
fn test_spans_in_context(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(engine().compile(input), expected);
}

#[rstest]
#[case("*a", "*a")]
#[case("a*", "a*")]
#[case("**a", "**a")]
#[case("~~a__", "~~a__")]
#[case("****", "****")]
fn test_malformed_spans_pass_through(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(engine().compile(input), expected);
}

#[test]
fn test_nearest_close_non_nesting() {
    // the second star closes the first pair, the fourth closes the third
    assert_eq!(engine().compile("*a*b*c*"), "<em>a</em>b<em>c</em>");
}

#[test]
fn test_repeated_opener_does_not_nest() {
    // tokens: ** a ** b ** — the first ** pairs with the second, the third
    // finds no closer and passes through
    assert_eq!(engine().compile("**a**b**"), "<strong>a</strong>b**");
}

#[test]
fn test_nested_emphasis_recurses() {
    assert_eq!(
        engine().compile("**a *b* c**"),
        "<strong>a <em>b</em> c</strong>"
    );
}

#[test]
fn test_double_nesting_recurses() {
    assert_eq!(
        engine().compile("__a **b *c* d** e__"),
        "<u>a <strong>b <em>c</em> d</strong> e</u>"
    );
}

#[test]
fn test_unpaired_symbols_inside_span_stay_literal() {
    assert_eq!(engine().compile("*a**b*"), "<em>a**b</em>");
}
