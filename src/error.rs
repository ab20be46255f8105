//! Error types for glint
//!
//! Highlighting itself never fails; these cover the layers around it.

use thiserror::Error;

/// Result type alias for glint operations
pub type Result<T> = std::result::Result<T, GlintError>;

/// glint error types
#[derive(Error, Debug)]
pub enum GlintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GlintError::UnsupportedLanguage("cobol".to_string());
        assert_eq!(err.to_string(), "Unsupported language: cobol");

        let err = GlintError::UnknownTheme("Solarized".to_string());
        assert_eq!(err.to_string(), "Unknown theme: Solarized");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GlintError = io.into();
        assert!(matches!(err, GlintError::Io(_)));
    }

    #[test]
    fn test_from_toml() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("theme = ");
        let err: GlintError = parsed.unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid configuration"));
    }
}
