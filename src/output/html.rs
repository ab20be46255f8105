//! HTML output
//!
//! Every classified token is wrapped in `<span class="{prefix}{category}">`.
//! Plain text and whitespace are written escaped but unwrapped, so the
//! markup drops straight into a `<pre>` block.

use super::{OutputBuilder, OutputFormat};
use crate::syntax::TokenType;

/// Default class name prefix
pub const DEFAULT_CLASS_PREFIX: &str = "glint-";

#[derive(Debug, Clone)]
pub struct HtmlOutputFormat {
    pub class_prefix: String,
}

impl HtmlOutputFormat {
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: class_prefix.into(),
        }
    }
}

impl Default for HtmlOutputFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

impl OutputFormat for HtmlOutputFormat {
    type Builder = HtmlBuilder;

    fn make_builder(&self) -> HtmlBuilder {
        HtmlBuilder {
            class_prefix: self.class_prefix.clone(),
            html: String::new(),
        }
    }
}

pub struct HtmlBuilder {
    class_prefix: String,
    html: String,
}

impl OutputBuilder for HtmlBuilder {
    type Output = String;

    fn add_token(&mut self, token: &str, token_type: TokenType) {
        self.html.push_str("<span class=\"");
        self.html.push_str(&self.class_prefix);
        self.html.push_str(token_type.name());
        self.html.push_str("\">");
        escape_into(&mut self.html, token);
        self.html.push_str("</span>");
    }

    fn add_plain_text(&mut self, text: &str) {
        escape_into(&mut self.html, text);
    }

    fn add_whitespace(&mut self, whitespace: &str) {
        self.html.push_str(whitespace);
    }

    fn build(self) -> String {
        self.html
    }
}

/// Escape the characters that are significant inside element content
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
