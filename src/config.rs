//! Configuration file support
//!
//! Loads settings from ~/.glint.toml (or %USERPROFILE%\.glint.toml on Windows)
//!
//! Every key is optional. Example:
//! ```toml
//! theme = "VS Code"
//! appearance = "dark"
//! format = "terminal"
//! language = "javascript"
//!
//! [extensions]
//! jsx = "javascript"
//! scss = "css"
//! ```

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::output::{Appearance, FormatKind};
use crate::syntax::GrammarRegistry;

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name
    pub theme: String,
    /// Light or dark colour variants
    pub appearance: Appearance,
    /// Output format
    pub format: FormatKind,
    /// Grammar used when the language cannot be detected
    pub language: Option<String>,
    /// Extra file extensions, mapped to language names
    pub extensions: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Xcode".to_string(),
            appearance: Appearance::Light,
            format: FormatKind::Terminal,
            language: None,
            extensions: HashMap::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".glint.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".glint.toml"))
        }
    }

    /// Load the user's configuration; defaults when there is no file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "loaded configuration");
                Self::from_toml(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Register the extra extensions with `registry`
    pub fn apply_extensions(&self, registry: &mut GrammarRegistry) -> Result<()> {
        for (extension, language) in &self.extensions {
            registry.add_extension(extension, language)?;
        }
        Ok(())
    }
}
