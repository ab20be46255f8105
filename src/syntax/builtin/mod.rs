//! Built-in grammars
//!
//! Each grammar lives in its own module and exposes a constructor;
//! rules shared between grammars live in `common`.

pub mod common;
pub mod css;
pub mod javascript;
pub mod rust;

use super::grammar::Grammar;

/// Every built-in grammar, the default one first
pub fn all_grammars() -> Vec<Grammar> {
    vec![
        rust::rust_grammar(),
        css::css_grammar(),
        javascript::javascript_grammar(),
    ]
}

/// Classify every non-whitespace token of `source`
#[cfg(test)]
pub(crate) fn classify(
    grammar: &Grammar,
    source: &str,
) -> Vec<(String, crate::syntax::tokens::TokenType)> {
    let stream = grammar.tokenize(source);
    stream
        .segments()
        .map(|segment| (segment.current().to_string(), grammar.classify(&segment)))
        .collect()
}
