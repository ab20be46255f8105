//! CSS grammar

use crate::syntax::builtin::common::{CommentRule, NumberRule, UrlRule};
use crate::syntax::chars::{is_alphanumeric_dash, is_capitalized, removing};
use crate::syntax::context::{
    is_within_braces, is_within_interpolation, is_within_raw_interpolation,
    is_within_string_literal,
};
use crate::syntax::delimiters::{c_family_merge, DelimiterPolicy};
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::SyntaxRule;
use crate::syntax::segment::{is_any, Segment, TokenWindow};
use crate::syntax::tokens::TokenType;

/// Characters that stay inside words: selectors, colours, units, at-rules
const NON_DELIMITERS: &[char] = &['_', '-', '"', '\'', '#', '@', '$', '%'];

const QUOTES: &[char] = &['"', '\''];

/// Create the CSS grammar
pub fn css_grammar() -> Grammar {
    Grammar::new("CSS", DelimiterPolicy::new(NON_DELIMITERS, c_family_merge))
        .with_extensions(&["css"])
        .with_rule(UrlRule)
        .with_rule(CommentRule)
        .with_rule(StringRule)
        .with_rule(NumberRule::with_units(&["px", "%"]))
        .with_rule(PropertyRule)
        .with_rule(SelectorRule)
        .with_rule(CallRule)
        .with_rule(ValueRule)
}

/// Quoted strings on a single line
struct StringRule;

impl SyntaxRule for StringRule {
    fn name(&self) -> &'static str {
        "string"
    }

    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        let self_delimited = QUOTES
            .iter()
            .any(|&q| current.starts_with(q) && current.ends_with(q));
        if self_delimited {
            return true;
        }

        let within = is_within_string_literal(segment, "\"", "\"", QUOTES)
            || is_within_string_literal(segment, "'", "'", QUOTES);
        if !within {
            return false;
        }

        !is_within_interpolation(segment, "\\(") && !is_within_raw_interpolation(segment)
    }
}

/// Property names: `color` in `{ color: red; }`
struct PropertyRule;

impl SyntaxRule for PropertyRule {
    fn name(&self) -> &'static str {
        "property"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Declaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if !is_alphanumeric_dash(segment.current()) {
            return false;
        }

        if segment.next() != Some(":") {
            return false;
        }

        // A declaration list may also start the buffer (inline styles)
        segment.previous().is_none() || is_any(segment.previous(), &[";", "{"])
    }
}

/// Selectors and at-rule names outside of declaration blocks
struct SelectorRule;

impl SyntaxRule for SelectorRule {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherDeclaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let bare = removing(&removing(segment.current(), "#"), "@");
        if !is_alphanumeric_dash(&bare) {
            return false;
        }

        if segment.next() == Some(";") {
            return false;
        }

        !is_within_braces(segment)
    }
}

/// Functional notation: `rgb(`, `url(`, `calc(`
struct CallRule;

impl SyntaxRule for CallRule {
    fn name(&self) -> &'static str {
        "call"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Call
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        !is_capitalized(current) && segment.next() == Some("(") && is_alphanumeric_dash(current)
    }
}

/// Property values on a `property: value` line
struct ValueRule;

impl SyntaxRule for ValueRule {
    fn name(&self) -> &'static str {
        "value"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherType
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        segment.on_same_line().contains_token(":")
            && is_alphanumeric_dash(&removing(segment.current(), "#"))
    }
}
