//! Grammars
//!
//! A [`Grammar`] bundles a delimiter policy with an ordered rule list for
//! one language. [`Language`] enumerates the built-in grammars.

use std::fmt;

use super::builtin;
use super::delimiters::DelimiterPolicy;
use super::rules::{self, SyntaxRule};
use super::segment::{Segment, TokenStream};
use super::tokens::TokenType;

/// A complete language grammar
pub struct Grammar {
    /// Language name (e.g. "Rust", "CSS")
    name: &'static str,
    /// File extensions handled by this grammar
    extensions: &'static [&'static str],
    /// How text is split into tokens
    delimiters: DelimiterPolicy,
    /// Rules in priority order; the first match wins
    rules: Vec<Box<dyn SyntaxRule>>,
}

impl Grammar {
    /// Create a grammar with no rules
    pub fn new(name: &'static str, delimiters: DelimiterPolicy) -> Self {
        Self {
            name,
            extensions: &[],
            delimiters,
            rules: Vec::new(),
        }
    }

    /// Builder: set the file extensions
    pub fn with_extensions(mut self, extensions: &'static [&'static str]) -> Self {
        self.extensions = extensions;
        self
    }

    /// Builder: append a rule at the lowest priority so far
    pub fn with_rule(mut self, rule: impl SyntaxRule + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    /// Append a rule at the lowest priority so far
    pub fn add_rule(&mut self, rule: impl SyntaxRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Language name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// File extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Delimiter policy
    pub fn delimiters(&self) -> &DelimiterPolicy {
        &self.delimiters
    }

    /// Rule names in priority order
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Tokenize `text` with this grammar's delimiter policy
    pub fn tokenize<'a>(&self, text: &'a str) -> TokenStream<'a> {
        TokenStream::new(text, &self.delimiters)
    }

    /// Category of the segment's current token
    pub fn classify(&self, segment: &Segment<'_, '_>) -> TokenType {
        rules::evaluate(&self.rules, segment)
    }

    /// The rule that decides the segment's category, if any
    pub fn matching_rule(&self, segment: &Segment<'_, '_>) -> Option<&dyn SyntaxRule> {
        rules::first_match(&self.rules, segment)
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("name", &self.name)
            .field("extensions", &self.extensions)
            .field("delimiters", &self.delimiters)
            .field("rules", &self.rule_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Built-in languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// The host systems language; used when nothing else is selected
    #[default]
    Rust,
    /// Stylesheets
    Css,
    /// C-family scripting
    JavaScript,
}

impl Language {
    /// Every built-in language
    pub const ALL: [Language; 3] = [Language::Rust, Language::Css, Language::JavaScript];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Rust => "Rust",
            Language::Css => "CSS",
            Language::JavaScript => "JavaScript",
        }
    }

    /// Look up a language by name or common alias, ignoring case
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Some(Language::Rust),
            "css" => Some(Language::Css),
            "javascript" | "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Build this language's grammar
    pub fn grammar(&self) -> Grammar {
        match self {
            Language::Rust => builtin::rust::rust_grammar(),
            Language::Css => builtin::css::css_grammar(),
            Language::JavaScript => builtin::javascript::javascript_grammar(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
