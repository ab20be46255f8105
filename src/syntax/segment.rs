//! Segments: per-token context windows
//!
//! A [`TokenStream`] is the append-only arena built once per pass. A
//! [`Segment`] is a cheap view onto one non-whitespace position in it,
//! exposing the neighbouring tokens, the same-line and full-history
//! windows, the raw prefix text and the trailing whitespace.

use super::delimiters::DelimiterPolicy;
use super::tokenizer::{self, Token};

/// Tokenized buffer with precomputed per-token context indices
pub struct TokenStream<'a> {
    source: &'a str,
    /// Every token, whitespace included
    raw: Vec<Token<'a>>,
    /// Text of each non-whitespace token, in order
    words: Vec<&'a str>,
    /// Byte offset of each non-whitespace token
    offsets: Vec<usize>,
    /// Index into `words` where each token's line begins
    line_starts: Vec<usize>,
    /// Whitespace directly after each non-whitespace token, if any
    trailing: Vec<Option<&'a str>>,
}

impl<'a> TokenStream<'a> {
    /// Tokenize `source` and index it
    pub fn new(source: &'a str, policy: &DelimiterPolicy) -> Self {
        let raw = tokenizer::split(source, policy);
        let mut words = Vec::new();
        let mut offsets = Vec::new();
        let mut line_starts = Vec::new();
        let mut trailing = Vec::new();
        let mut line_start = 0;

        for token in &raw {
            if token.is_whitespace() {
                if let Some(last) = trailing.last_mut() {
                    *last = Some(token.text);
                }
                if token.contains_newline() {
                    line_start = words.len();
                }
                continue;
            }

            words.push(token.text);
            offsets.push(token.offset);
            line_starts.push(line_start);
            trailing.push(None);
        }

        Self {
            source,
            raw,
            words,
            offsets,
            line_starts,
            trailing,
        }
    }

    /// The source buffer
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Every raw token, whitespace included
    pub fn raw_tokens(&self) -> &[Token<'a>] {
        &self.raw
    }

    /// Number of non-whitespace tokens
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no non-whitespace tokens
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Build the segment for the `index`-th non-whitespace token
    pub fn segment_at(&self, index: usize) -> Option<Segment<'_, 'a>> {
        (index < self.words.len()).then_some(Segment {
            stream: self,
            index,
        })
    }

    /// Iterate over every segment in source order
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_, 'a>> + '_ {
        (0..self.words.len()).map(move |index| Segment {
            stream: self,
            index,
        })
    }
}

/// Read-only context view centred on one token
#[derive(Clone, Copy)]
pub struct Segment<'s, 'a> {
    stream: &'s TokenStream<'a>,
    index: usize,
}

impl<'s, 'a> Segment<'s, 'a> {
    /// Position of the current token among non-whitespace tokens
    pub fn index(&self) -> usize {
        self.index
    }

    /// The token being classified
    pub fn current(&self) -> &'a str {
        self.stream.words[self.index]
    }

    /// Nearest non-whitespace token before the current one
    pub fn previous(&self) -> Option<&'a str> {
        self.index
            .checked_sub(1)
            .map(|i| self.stream.words[i])
    }

    /// Nearest non-whitespace token after the current one
    pub fn next(&self) -> Option<&'a str> {
        self.stream.words.get(self.index + 1).copied()
    }

    /// Tokens on the current line up to and including the current token
    pub fn on_same_line(&self) -> &'s [&'a str] {
        &self.stream.words[self.stream.line_starts[self.index]..=self.index]
    }

    /// Tokens on the current line strictly before the current token
    pub fn preceding_on_line(&self) -> &'s [&'a str] {
        &self.stream.words[self.stream.line_starts[self.index]..self.index]
    }

    /// Every token from the start of the buffer through the current one
    pub fn all(&self) -> &'s [&'a str] {
        &self.stream.words[..=self.index]
    }

    /// Raw source text before the current token
    pub fn prefix(&self) -> &'a str {
        &self.stream.source[..self.stream.offsets[self.index]]
    }

    /// Whitespace following the current token; `None` when the next token is adjacent
    pub fn trailing_whitespace(&self) -> Option<&'a str> {
        self.stream.trailing[self.index]
    }

    /// Whether the current token is the first one on its line
    pub fn is_first_on_line(&self) -> bool {
        self.stream.line_starts[self.index] == self.index
    }
}

impl std::fmt::Debug for Segment<'_, '_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segment")
            .field("current", &self.current())
            .field("previous", &self.previous())
            .field("next", &self.next())
            .field("on_same_line", &self.on_same_line())
            .finish()
    }
}

/// Membership queries over token windows
pub trait TokenWindow {
    /// Whether the window contains `token`
    fn contains_token(&self, token: &str) -> bool;
    /// Whether the window contains any of `tokens`
    fn contains_any(&self, tokens: &[&str]) -> bool;
    /// Number of occurrences of `token`
    fn count_of(&self, token: &str) -> usize;
    /// Whether the window ends with exactly `tail`
    fn ends_with_tokens(&self, tail: &[&str]) -> bool;
}

impl TokenWindow for [&str] {
    fn contains_token(&self, token: &str) -> bool {
        self.iter().any(|t| *t == token)
    }

    fn contains_any(&self, tokens: &[&str]) -> bool {
        self.iter().any(|t| tokens.iter().any(|c| c == t))
    }

    fn count_of(&self, token: &str) -> usize {
        self.iter().filter(|t| **t == token).count()
    }

    fn ends_with_tokens(&self, tail: &[&str]) -> bool {
        self.len() >= tail.len()
            && self[self.len() - tail.len()..]
                .iter()
                .zip(tail)
                .all(|(a, b)| a == b)
    }
}

/// Whether an optional token equals one of `candidates`
pub fn is_any(token: Option<&str>, candidates: &[&str]) -> bool {
    token.is_some_and(|t| candidates.iter().any(|c| *c == t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::delimiters::c_family_merge;

    const POLICY: DelimiterPolicy = DelimiterPolicy::new(&['_'], c_family_merge);

    #[test]
    fn test_neighbours() {
        let stream = TokenStream::new("a b\nc", &POLICY);
        assert_eq!(stream.len(), 3);

        let first = stream.segment_at(0).unwrap();
        assert_eq!(first.current(), "a");
        assert_eq!(first.previous(), None);
        assert_eq!(first.next(), Some("b"));

        let last = stream.segment_at(2).unwrap();
        assert_eq!(last.previous(), Some("b"));
        assert_eq!(last.next(), None);
        assert!(stream.segment_at(3).is_none());
    }

    #[test]
    fn test_same_line_window_resets_on_newline() {
        let stream = TokenStream::new("a b\nc d", &POLICY);
        let d = stream.segment_at(3).unwrap();
        assert_eq!(d.on_same_line(), &["c", "d"]);
        assert_eq!(d.preceding_on_line(), &["c"]);
        assert_eq!(d.all(), &["a", "b", "c", "d"]);
        assert!(stream.segment_at(2).unwrap().is_first_on_line());
        assert!(!d.is_first_on_line());
    }

    #[test]
    fn test_prefix_and_trailing_whitespace() {
        let stream = TokenStream::new("foo(x)  {", &POLICY);
        let foo = stream.segment_at(0).unwrap();
        assert_eq!(foo.prefix(), "");
        assert_eq!(foo.trailing_whitespace(), None);

        let close = stream.segment_at(3).unwrap();
        assert_eq!(close.current(), ")");
        assert_eq!(close.prefix(), "foo(x");
        assert_eq!(close.trailing_whitespace(), Some("  "));
    }

    #[test]
    fn test_leading_whitespace_is_not_trailing() {
        let stream = TokenStream::new("  \n x", &POLICY);
        let x = stream.segment_at(0).unwrap();
        assert_eq!(x.prefix(), "  \n ");
        assert_eq!(x.on_same_line(), &["x"]);
        assert_eq!(x.trailing_whitespace(), None);
    }

    #[test]
    fn test_token_window_queries() {
        let window: &[&str] = &["let", "x", "=", "x"];
        assert!(window.contains_token("="));
        assert!(window.contains_any(&["var", "let"]));
        assert_eq!(window.count_of("x"), 2);
        assert!(window.ends_with_tokens(&["=", "x"]));
        assert!(is_any(Some("a"), &["a", "b"]));
        assert!(!is_any(None, &["a"]));
    }
}
