//! Raw text tokenizer
//!
//! Splits a buffer into word, symbol and whitespace tokens under a
//! [`DelimiterPolicy`]. The split is lossless: concatenating every
//! token's text yields the input.

use super::delimiters::DelimiterPolicy;

/// Kind of a raw token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of non-delimiter characters
    Word,
    /// One delimiter plus whatever the merge predicate absorbed
    Symbol,
    /// Run of whitespace, newlines included
    Whitespace,
}

/// A slice of the source with its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Source text of this token
    pub text: &'a str,
    /// Byte offset of the token in the source
    pub offset: usize,
    /// Token kind
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Whether this is a whitespace token
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Whether this token ends the current line
    pub fn contains_newline(&self) -> bool {
        self.is_whitespace() && self.text.contains('\n')
    }
}

/// Split `text` into tokens
pub fn split<'a>(text: &'a str, policy: &DelimiterPolicy) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let kind = if c.is_whitespace() {
            while chars.next_if(|&(_, n)| n.is_whitespace()).is_some() {}
            TokenKind::Whitespace
        } else if policy.is_delimiter(c) {
            // Greedy pairwise extension; one character per step
            let mut last = c;
            while let Some((_, n)) = chars.next_if(|&(_, n)| policy.can_merge(last, n)) {
                last = n;
            }
            TokenKind::Symbol
        } else {
            while chars
                .next_if(|&(_, n)| !n.is_whitespace() && !policy.is_delimiter(n))
                .is_some()
            {}
            TokenKind::Word
        };

        let end = chars.peek().map_or(text.len(), |&(i, _)| i);
        tokens.push(Token {
            text: &text[start..end],
            offset: start,
            kind,
        });
    }

    tokens
}
