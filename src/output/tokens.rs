//! Token listing for debugging grammars
//!
//! One line per token: the token text padded to a common display width,
//! then its category. Whitespace runs are skipped.

use unicode_width::UnicodeWidthStr;

use super::{OutputBuilder, OutputFormat};
use crate::syntax::TokenType;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenListOutputFormat;

impl OutputFormat for TokenListOutputFormat {
    type Builder = TokenListBuilder;

    fn make_builder(&self) -> TokenListBuilder {
        TokenListBuilder::default()
    }
}

#[derive(Default)]
pub struct TokenListBuilder {
    rows: Vec<(String, TokenType)>,
}

impl OutputBuilder for TokenListBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: TokenType) {
        self.rows.push((printable(token), token_type));
    }

    fn add_plain_text(&mut self, text: &str) {
        self.rows.push((printable(text), TokenType::Plain));
    }

    fn add_whitespace(&mut self, _whitespace: &str) {}

    fn build(self) -> String {
        let column = self
            .rows
            .iter()
            .map(|(text, _)| text.width())
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        for (text, token_type) in &self.rows {
            out.push_str(text);
            out.push_str(&" ".repeat(column - text.width() + 2));
            out.push_str(token_type.name());
            out.push('\n');
        }
        out
    }
}

/// Multi-line tokens (block comments, template literals) stay on one row
fn printable(text: &str) -> String {
    text.replace('\n', "\\n").replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_columns() {
        let mut builder = TokenListOutputFormat.make_builder();
        builder.add_token("fn", TokenType::Keyword);
        builder.add_whitespace(" ");
        builder.add_token("main", TokenType::OtherDeclaration);
        builder.add_plain_text("(");
        assert_eq!(
            builder.build(),
            "fn    keyword\nmain  otherDeclaration\n(     plain\n"
        );
    }

    #[test]
    fn test_wide_characters() {
        let mut builder = TokenListOutputFormat.make_builder();
        builder.add_token("\"日本\"", TokenType::String);
        builder.add_plain_text("x");
        let listing = builder.build();
        let lines: Vec<&str> = listing.lines().collect();
        // "日本" is four columns wide
        assert_eq!(lines[0], "\"日本\"  string");
        assert_eq!(lines[1], "x       plain");
    }

    #[test]
    fn test_newlines_escaped() {
        let mut builder = TokenListOutputFormat.make_builder();
        builder.add_token("/* a\nb */", TokenType::Comment);
        assert_eq!(builder.build(), "/* a\\nb */  comment\n");
    }
}
