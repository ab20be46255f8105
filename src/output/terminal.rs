//! 24-bit ANSI terminal output

use std::collections::HashMap;

use crossterm::style::{style, Color, Stylize};

use super::theme::{Appearance, Rgb, Theme};
use super::{OutputBuilder, OutputFormat};
use crate::syntax::TokenType;

/// Colours tokens with a theme resolved for one appearance
#[derive(Debug, Clone, Default)]
pub struct TerminalOutputFormat {
    pub theme: Theme,
    pub appearance: Appearance,
}

impl TerminalOutputFormat {
    pub fn new(theme: Theme, appearance: Appearance) -> Self {
        Self { theme, appearance }
    }
}

impl OutputFormat for TerminalOutputFormat {
    type Builder = TerminalBuilder;

    fn make_builder(&self) -> TerminalBuilder {
        let colours = TokenType::ALL
            .into_iter()
            .map(|t| (t, self.theme.colour(t).resolve(self.appearance)))
            .collect();

        TerminalBuilder {
            plain: self.theme.plain_text.resolve(self.appearance),
            colours,
            output: String::new(),
        }
    }
}

/// Accumulates escape-coded text
pub struct TerminalBuilder {
    plain: Rgb,
    colours: HashMap<TokenType, Rgb>,
    output: String,
}

impl TerminalBuilder {
    fn paint(&mut self, text: &str, colour: Rgb) {
        let styled = style(text).with(Color::Rgb {
            r: colour.r,
            g: colour.g,
            b: colour.b,
        });
        self.output.push_str(&styled.to_string());
    }
}

impl OutputBuilder for TerminalBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: TokenType) {
        let colour = self.colours.get(&token_type).copied().unwrap_or(self.plain);
        self.paint(token, colour);
    }

    fn add_plain_text(&mut self, text: &str) {
        let plain = self.plain;
        self.paint(text, plain);
    }

    fn add_whitespace(&mut self, whitespace: &str) {
        self.output.push_str(whitespace);
    }

    fn build(self) -> String {
        self.output
    }
}
