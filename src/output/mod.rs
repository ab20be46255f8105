//! Output formats
//!
//! The highlighter streams every span of the input, in order, to an
//! [`OutputBuilder`]. An [`OutputFormat`] is the reusable factory for
//! builders; it carries settings such as the theme.

pub mod html;
pub mod terminal;
pub mod theme;
pub mod tokens;

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::GlintError;
use crate::syntax::TokenType;

pub use html::HtmlOutputFormat;
pub use terminal::TerminalOutputFormat;
pub use theme::{Appearance, DynamicColour, Rgb, Theme};
pub use tokens::TokenListOutputFormat;

/// Receives highlighted spans in source order
pub trait OutputBuilder {
    /// What [`build`](Self::build) produces
    type Output;

    /// A token with a category other than plain
    fn add_token(&mut self, token: &str, token_type: TokenType);

    /// A token no rule claimed
    fn add_plain_text(&mut self, text: &str);

    /// A whitespace run, newlines included
    fn add_whitespace(&mut self, whitespace: &str);

    /// Finish and return the output
    fn build(self) -> Self::Output;
}

/// Factory for [`OutputBuilder`]s
pub trait OutputFormat {
    type Builder: OutputBuilder;

    /// Start a fresh builder
    fn make_builder(&self) -> Self::Builder;
}

/// Output formats selectable from the command line and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// 24-bit ANSI colours
    #[default]
    Terminal,
    /// `<span>`-wrapped HTML
    Html,
    /// One token per line with its category
    Tokens,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Terminal, FormatKind::Html, FormatKind::Tokens];

    pub fn name(&self) -> &'static str {
        match self {
            FormatKind::Terminal => "terminal",
            FormatKind::Html => "html",
            FormatKind::Tokens => "tokens",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormatKind {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GlintError::Message(format!("Unknown output format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kind_parse() {
        assert_eq!("html".parse::<FormatKind>().unwrap(), FormatKind::Html);
        assert_eq!("TOKENS".parse::<FormatKind>().unwrap(), FormatKind::Tokens);
        assert!("pdf".parse::<FormatKind>().is_err());
        assert_eq!(FormatKind::default(), FormatKind::Terminal);
    }
}
