//! Syntax rules
//!
//! A rule is a pure predicate over a [`Segment`] paired with the category
//! it assigns. Grammars keep their rules in a fixed order and the first
//! rule that matches decides the category.

use super::segment::Segment;
use super::tokens::TokenType;

/// A single classification rule
///
/// Implementations must not keep mutable state: the same rule instance
/// is shared by every highlighting pass, possibly on several threads.
pub trait SyntaxRule: Send + Sync {
    /// Name for debugging
    fn name(&self) -> &'static str;

    /// Category assigned to matching tokens
    fn token_type(&self) -> TokenType;

    /// Whether this rule claims the segment's current token
    fn matches(&self, segment: &Segment<'_, '_>) -> bool;
}

/// Return the first rule in `rules` that matches `segment`
pub fn first_match<'r>(
    rules: &'r [Box<dyn SyntaxRule>],
    segment: &Segment<'_, '_>,
) -> Option<&'r dyn SyntaxRule> {
    rules
        .iter()
        .map(|rule| rule.as_ref())
        .find(|rule| rule.matches(segment))
}

/// Classify `segment` with the ordered `rules`; no match means plain text
pub fn evaluate(rules: &[Box<dyn SyntaxRule>], segment: &Segment<'_, '_>) -> TokenType {
    first_match(rules, segment).map_or(TokenType::Plain, |rule| rule.token_type())
}
