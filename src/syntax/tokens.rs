//! Token categories for syntax highlighting
//!
//! This module defines the closed set of semantic categories a
//! classified token can receive. Renderers map these to colours.

/// Semantic token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Language keywords (fn, let, function, return, ...)
    Keyword,
    /// String and character literals
    String,
    /// Numeric literals
    Number,
    /// Line and block comments
    Comment,
    /// URLs found inside comments
    Url,
    /// Built-in type names
    Type,
    /// User-defined or otherwise capitalized type names
    OtherType,
    /// Function, method and macro calls
    Call,
    /// Property access (`foo.bar`)
    Property,
    /// Leading-dot member access (`(.foo` or ` .foo`)
    DotAccess,
    /// Names introduced by a type-level declaration (class, struct, ...)
    Declaration,
    /// Other declared names (functions, variables, parameters)
    OtherDeclaration,
    /// Preprocessor-like constructs (attributes)
    Preprocessing,
    /// No matching rule
    Plain,
}

impl TokenType {
    /// Every category, in declaration order
    pub const ALL: [TokenType; 14] = [
        TokenType::Keyword,
        TokenType::String,
        TokenType::Number,
        TokenType::Comment,
        TokenType::Url,
        TokenType::Type,
        TokenType::OtherType,
        TokenType::Call,
        TokenType::Property,
        TokenType::DotAccess,
        TokenType::Declaration,
        TokenType::OtherDeclaration,
        TokenType::Preprocessing,
        TokenType::Plain,
    ];

    /// Get the stable name of this category (used for HTML classes and config)
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Keyword => "keyword",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Comment => "comment",
            TokenType::Url => "url",
            TokenType::Type => "type",
            TokenType::OtherType => "otherType",
            TokenType::Call => "call",
            TokenType::Property => "property",
            TokenType::DotAccess => "dotAccess",
            TokenType::Declaration => "declaration",
            TokenType::OtherDeclaration => "otherDeclaration",
            TokenType::Preprocessing => "preprocessing",
            TokenType::Plain => "plain",
        }
    }

    /// Parse a category from its name
    pub fn from_name(name: &str) -> Option<Self> {
        TokenType::ALL.iter().copied().find(|t| t.name() == name)
    }

    /// Whether this is the fallback category
    pub fn is_plain(&self) -> bool {
        *self == TokenType::Plain
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for token_type in TokenType::ALL {
            assert_eq!(TokenType::from_name(token_type.name()), Some(token_type));
        }
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenType::from_name("Keyword"), None);
        assert_eq!(TokenType::from_name(""), None);
    }

    #[test]
    fn test_only_plain_is_plain() {
        let plain: Vec<_> = TokenType::ALL.iter().filter(|t| t.is_plain()).collect();
        assert_eq!(plain, vec![&TokenType::Plain]);
    }
}
