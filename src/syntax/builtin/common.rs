//! Rules shared by several grammars

use crate::syntax::chars::{is_number, removing};
use crate::syntax::context::{is_within_comment, prefix_continues_url, COMMENT_PUNCTUATION};
use crate::syntax::rules::SyntaxRule;
use crate::syntax::segment::{is_any, Segment, TokenWindow};
use crate::syntax::tokens::TokenType;

/// URLs inside comments
///
/// Runs before [`CommentRule`] so links stand out within comment text.
pub struct UrlRule;

impl SyntaxRule for UrlRule {
    fn name(&self) -> &'static str {
        "url"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Url
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();

        if COMMENT_PUNCTUATION.contains_token(current) {
            return false;
        }

        if !is_within_comment(segment) {
            return false;
        }

        if is_any(Some(current), &["http", "https"]) && segment.next() == Some("://") {
            return true;
        }

        if current == "://" && is_any(segment.previous(), &["http", "https"]) {
            return true;
        }

        prefix_continues_url(segment)
    }
}

/// Line and block comments
pub struct CommentRule;

impl SyntaxRule for CommentRule {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Comment
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_within_comment(segment)
    }
}

/// Numeric literals for grammars whose tokens split on `.`
///
/// `units` are suffixes stripped before parsing (`px`, `%`).
#[derive(Default)]
pub struct NumberRule {
    units: &'static [&'static str],
}

impl NumberRule {
    /// Plain numbers only
    pub fn new() -> Self {
        Self { units: &[] }
    }

    /// Numbers that may carry one of `units`
    pub fn with_units(units: &'static [&'static str]) -> Self {
        Self { units }
    }
}

impl SyntaxRule for NumberRule {
    fn name(&self) -> &'static str {
        "number"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Number
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        // `$0`-style positional arguments are not numbers
        if segment.previous().is_some_and(|p| p.ends_with('$')) {
            return false;
        }

        let digits = self
            .units
            .iter()
            .fold(removing(segment.current(), "_"), |token, unit| removing(&token, unit));
        if is_number(&digits) {
            return true;
        }

        // Decimal point between two numbers
        if segment.current() != "." {
            return false;
        }

        match (segment.previous(), segment.next()) {
            (Some(previous), Some(next)) => is_number(previous) && is_number(next),
            _ => false,
        }
    }
}

/// Paren depth of the last token inside the signature that starts at the
/// last `keyword` in `history`
///
/// `None` when there is no such keyword or its parameter list is closed.
pub fn parameter_list_depth(history: &[&str], keyword: &str) -> Option<isize> {
    let start = history.iter().rposition(|t| *t == keyword)?;

    let mut depth = 0isize;
    for token in history[start..].iter().rev() {
        match *token {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    return None;
                }
            }
            _ => {}
        }
    }

    Some(depth)
}
