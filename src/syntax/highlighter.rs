//! Highlighting driver
//!
//! Walks the raw token stream once, forwarding whitespace untouched and
//! classifying every other token through the grammar's rules.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::grammar::Grammar;
use super::segment::TokenStream;
use super::tokens::TokenType;
use crate::output::{OutputBuilder, OutputFormat};

/// What a highlighted span holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Whitespace,
    Token(TokenType),
}

/// One span of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub text: &'a str,
    pub kind: SpanKind,
}

impl Highlight<'_> {
    /// Category of the span; whitespace counts as plain
    pub fn token_type(&self) -> TokenType {
        match self.kind {
            SpanKind::Whitespace => TokenType::Plain,
            SpanKind::Token(token_type) => token_type,
        }
    }
}

/// Highlights text with one grammar
///
/// Holds nothing but a shared reference, so a highlighter is cheap to make
/// and a single grammar can serve any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Highlighter<'g> {
    grammar: &'g Grammar,
}

impl<'g> Highlighter<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Lazily classify `text`, span by span
    pub fn highlight<'a>(&self, text: &'a str) -> Highlights<'g, 'a> {
        let stream = self.grammar.tokenize(text);
        debug!(
            grammar = self.grammar.name(),
            bytes = text.len(),
            tokens = stream.len(),
            "highlighting"
        );
        Highlights {
            grammar: self.grammar,
            stream,
            raw: 0,
            word: 0,
        }
    }

    /// Highlight `text` into a fresh builder from `format`
    pub fn render<F: OutputFormat>(
        &self,
        text: &str,
        format: &F,
    ) -> <F::Builder as OutputBuilder>::Output {
        let mut builder = format.make_builder();
        for span in self.highlight(text) {
            match span.kind {
                SpanKind::Whitespace => builder.add_whitespace(span.text),
                SpanKind::Token(TokenType::Plain) => builder.add_plain_text(span.text),
                SpanKind::Token(token_type) => builder.add_token(span.text, token_type),
            }
        }
        builder.build()
    }
}

/// Ordered spans of one input; consumed once
pub struct Highlights<'g, 'a> {
    grammar: &'g Grammar,
    stream: TokenStream<'a>,
    /// Next raw token
    raw: usize,
    /// Next non-whitespace token
    word: usize,
}

impl<'a> Iterator for Highlights<'_, 'a> {
    type Item = Highlight<'a>;

    fn next(&mut self) -> Option<Highlight<'a>> {
        let token = *self.stream.raw_tokens().get(self.raw)?;
        self.raw += 1;

        if token.is_whitespace() {
            return Some(Highlight {
                text: token.text,
                kind: SpanKind::Whitespace,
            });
        }

        let segment = self.stream.segment_at(self.word)?;
        self.word += 1;

        let token_type = match self.grammar.matching_rule(&segment) {
            Some(rule) => {
                trace!(token = token.text, rule = rule.name(), "matched");
                rule.token_type()
            }
            None => TokenType::Plain,
        };

        Some(Highlight {
            text: token.text,
            kind: SpanKind::Token(token_type),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.stream.raw_tokens().len() - self.raw;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Highlights<'_, '_> {}

/// Once the raw tokens run out `next` keeps returning `None`
impl FusedIterator for Highlights<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TokenListOutputFormat;
    use crate::syntax::grammar::Language;

    fn spans(language: Language, source: &str) -> Vec<(String, SpanKind)> {
        let grammar = language.grammar();
        Highlighter::new(&grammar)
            .highlight(source)
            .map(|h| (h.text.to_string(), h.kind))
            .collect()
    }

    /// Records builder calls verbatim
    struct Recording;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl OutputFormat for Recording {
        type Builder = Recorder;

        fn make_builder(&self) -> Recorder {
            Recorder::default()
        }
    }

    impl OutputBuilder for Recorder {
        type Output = Vec<String>;

        fn add_token(&mut self, token: &str, token_type: TokenType) {
            self.0.push(format!("{}:{}", token_type, token));
        }

        fn add_plain_text(&mut self, text: &str) {
            self.0.push(format!("plain:{}", text));
        }

        fn add_whitespace(&mut self, whitespace: &str) {
            self.0.push(format!("ws:{:?}", whitespace));
        }

        fn build(self) -> Vec<String> {
            self.0
        }
    }

    #[test]
    fn test_spans_reconstruct_input() {
        let source = "fn main() {\n    let x = \"hi\"; // done\n}\n";
        let text: String = spans(Language::Rust, source)
            .into_iter()
            .map(|(t, _)| t)
            .collect();
        assert_eq!(text, source);
    }

    #[test]
    fn test_whitespace_forwarded() {
        let result = spans(Language::JavaScript, "a \n\tb");
        assert_eq!(result[1], (" \n\t".to_string(), SpanKind::Whitespace));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_render_dispatches_by_category() {
        let grammar = Language::JavaScript.grammar();
        let calls = Highlighter::new(&grammar).render("return x;", &Recording);
        assert_eq!(
            calls,
            vec!["keyword:return", "ws:\" \"", "plain:x", "plain:;"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(spans(Language::Css, "").is_empty());
        let grammar = Language::Rust.grammar();
        assert_eq!(Highlighter::new(&grammar).render("", &TokenListOutputFormat), "");
    }

    #[test]
    fn test_block_comment_parity() {
        let source = "/* one two */\nlet a = 1;\n/* three\nfour */\nlet b = 2;\n";
        let result = spans(Language::JavaScript, source);
        let comment_text: String = result
            .iter()
            .filter(|(_, kind)| *kind == SpanKind::Token(TokenType::Comment))
            .map(|(t, _)| t.as_str())
            .collect();
        assert_eq!(comment_text, "/*onetwo*//*threefour*/");
        assert!(result
            .iter()
            .any(|(t, kind)| t == "let" && *kind == SpanKind::Token(TokenType::Keyword)));
    }

    #[test]
    fn test_unterminated_comment_runs_to_end() {
        let result = spans(Language::Rust, "x /* never closed\nlet y = 2;");
        let words: Vec<_> = result
            .iter()
            .filter(|(_, kind)| *kind != SpanKind::Whitespace)
            .collect();
        assert_eq!(words[0].1, SpanKind::Token(TokenType::Plain));
        assert!(words[1..]
            .iter()
            .all(|(_, kind)| *kind == SpanKind::Token(TokenType::Comment)));
    }

    #[test]
    fn test_size_hint_is_exact() {
        let grammar = Language::Css.grammar();
        let mut spans = Highlighter::new(&grammar).highlight("a { b: c; }");
        let (lower, upper) = spans.size_hint();
        assert_eq!(Some(lower), upper);
        spans.next();
        assert_eq!(spans.size_hint().0, lower - 1);
        assert_eq!(spans.count(), lower - 1);
    }

    #[test]
    fn test_exact_size_and_fused() {
        let grammar = Language::Rust.grammar();
        let mut spans = Highlighter::new(&grammar).highlight("let x = 1;");
        // let, x, =, 1, ; and three spaces
        assert_eq!(spans.len(), 8);

        spans.by_ref().for_each(drop);
        assert_eq!(spans.len(), 0);
        assert!(spans.next().is_none());
        assert!(spans.next().is_none());
    }
}
