//! Grammar registry
//!
//! Owns one instance of every built-in grammar and resolves languages by
//! name or by file extension.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::builtin;
use super::grammar::{Grammar, Language};
use crate::error::{GlintError, Result};

/// Built-in grammars plus the extension table used for detection
pub struct GrammarRegistry {
    grammars: HashMap<Language, Grammar>,
    /// Lowercased extension to language
    extension_map: HashMap<String, Language>,
}

impl GrammarRegistry {
    /// Create a registry with every built-in grammar
    pub fn new() -> Self {
        let mut registry = Self {
            grammars: HashMap::new(),
            extension_map: HashMap::new(),
        };

        for grammar in builtin::all_grammars() {
            if let Some(language) = Language::from_name(grammar.name()) {
                registry.add_grammar(language, grammar);
            }
        }

        registry
    }

    /// Register (or replace) the grammar for `language`
    pub fn add_grammar(&mut self, language: Language, grammar: Grammar) {
        for ext in grammar.extensions() {
            self.extension_map.insert(ext.to_lowercase(), language);
        }
        self.grammars.insert(language, grammar);
    }

    /// Map an extra file extension to a language named in configuration
    pub fn add_extension(&mut self, extension: &str, language: &str) -> Result<()> {
        let language = Self::resolve(language)?;
        let extension = extension.trim_start_matches('.').to_lowercase();
        debug!(extension = %extension, language = %language, "mapped extension");
        self.extension_map.insert(extension, language);
        Ok(())
    }

    /// Parse a language name or alias
    pub fn resolve(name: &str) -> Result<Language> {
        Language::from_name(name).ok_or_else(|| GlintError::UnsupportedLanguage(name.to_string()))
    }

    /// Grammar for a language name or alias
    pub fn get(&self, name: &str) -> Result<&Grammar> {
        let language = Self::resolve(name)?;
        self.grammar(language)
    }

    /// Grammar for a language
    pub fn grammar(&self, language: Language) -> Result<&Grammar> {
        self.grammars
            .get(&language)
            .ok_or_else(|| GlintError::UnsupportedLanguage(language.name().to_string()))
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<Language> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).copied()
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.grammars.keys().map(|l| l.name()).collect();
        names.sort_unstable();
        names
    }

    /// Extensions mapped to `language`, sorted
    pub fn extensions_for(&self, language: Language) -> Vec<&str> {
        let mut exts: Vec<_> = self
            .extension_map
            .iter()
            .filter(|(_, l)| **l == language)
            .map(|(e, _)| e.as_str())
            .collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
