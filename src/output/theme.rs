//! Colour themes
//!
//! A theme maps every category to a light/dark colour pair. Categories
//! without an entry fall back to the plain text colour.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{GlintError, Result};
use crate::syntax::TokenType;

/// 24-bit colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Light/dark variants of one colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicColour {
    pub light: Rgb,
    pub dark: Rgb,
}

impl DynamicColour {
    pub const fn new(light: Rgb, dark: Rgb) -> Self {
        Self { light, dark }
    }

    /// The same colour in both appearances
    pub const fn fixed(colour: Rgb) -> Self {
        Self::new(colour, colour)
    }

    /// Resolve for an appearance
    pub fn resolve(&self, appearance: Appearance) -> Rgb {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }
}

/// Black on white by default, white on black in dark mode
impl Default for DynamicColour {
    fn default() -> Self {
        Self::new(Rgb::BLACK, Rgb::WHITE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl FromStr for Appearance {
    type Err = GlintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Appearance::Light),
            "dark" => Ok(Appearance::Dark),
            _ => Err(GlintError::Message(format!("Unknown appearance: {}", s))),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Appearance::Light => f.write_str("light"),
            Appearance::Dark => f.write_str("dark"),
        }
    }
}

/// A named set of colours
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub plain_text: DynamicColour,
    pub background: DynamicColour,
    pub token_colours: HashMap<TokenType, DynamicColour>,
}

/// Names of the built-in themes, the default first
pub const BUILTIN_THEMES: [&str; 2] = ["Xcode", "VS Code"];

impl Theme {
    /// Look up a built-in theme, ignoring case
    pub fn named(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "xcode" => Ok(Self::xcode()),
            "vs code" | "vscode" | "vs-code" => Ok(Self::vs_code()),
            _ => Err(GlintError::UnknownTheme(name.to_string())),
        }
    }

    /// Colour for a category, plain text when the theme has none
    pub fn colour(&self, token_type: TokenType) -> DynamicColour {
        self.token_colours
            .get(&token_type)
            .copied()
            .unwrap_or(self.plain_text)
    }

    pub fn xcode() -> Self {
        let pair = |light: (u8, u8, u8), dark: (u8, u8, u8)| {
            DynamicColour::new(
                Rgb::new(light.0, light.1, light.2),
                Rgb::new(dark.0, dark.1, dark.2),
            )
        };
        let member = pair((50, 109, 116), (103, 183, 164));

        Self {
            name: "Xcode".to_string(),
            plain_text: DynamicColour::default(),
            background: DynamicColour::new(Rgb::WHITE, Rgb::BLACK),
            token_colours: HashMap::from([
                (TokenType::Keyword, pair((155, 35, 147), (252, 95, 163))),
                (TokenType::String, pair((196, 26, 22), (252, 106, 93))),
                (TokenType::Type, pair((108, 54, 169), (161, 103, 230))),
                (TokenType::OtherType, pair((28, 70, 74), (158, 241, 221))),
                (TokenType::Call, member),
                (TokenType::Number, pair((28, 0, 207), (208, 191, 105))),
                (TokenType::Comment, pair((93, 108, 121), (108, 121, 134))),
                (TokenType::Url, pair((14, 14, 255), (84, 130, 255))),
                (TokenType::Property, member),
                (TokenType::DotAccess, member),
                (TokenType::Preprocessing, pair((100, 56, 32), (253, 143, 63))),
                (TokenType::Declaration, pair((11, 79, 121), (93, 216, 255))),
                (TokenType::OtherDeclaration, pair((15, 104, 160), (65, 161, 192))),
            ]),
        }
    }

    pub fn vs_code() -> Self {
        let fixed = |r, g, b| DynamicColour::fixed(Rgb::new(r, g, b));
        let member = fixed(120, 214, 255);

        Self {
            name: "VS Code".to_string(),
            plain_text: DynamicColour::default(),
            background: DynamicColour::new(Rgb::WHITE, Rgb::BLACK),
            token_colours: HashMap::from([
                (TokenType::Keyword, fixed(86, 156, 214)),
                (TokenType::String, fixed(206, 145, 120)),
                (TokenType::Type, fixed(78, 201, 176)),
                (TokenType::OtherType, fixed(195, 106, 183)),
                (TokenType::Call, member),
                (TokenType::Number, fixed(160, 198, 147)),
                (TokenType::Comment, fixed(75, 140, 60)),
                (TokenType::Url, fixed(117, 193, 89)),
                (TokenType::Property, member),
                (TokenType::DotAccess, member),
                (
                    TokenType::Preprocessing,
                    DynamicColour::new(Rgb::new(100, 56, 32), Rgb::new(253, 143, 63)),
                ),
                (TokenType::Declaration, fixed(0, 189, 154)),
                (TokenType::OtherDeclaration, fixed(220, 220, 178)),
            ]),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::xcode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes_cover_every_category() {
        for name in BUILTIN_THEMES {
            let theme = Theme::named(name).unwrap();
            assert_eq!(theme.name, name);
            for token_type in TokenType::ALL.into_iter().filter(|t| !t.is_plain()) {
                assert!(
                    theme.token_colours.contains_key(&token_type),
                    "{} lacks {}",
                    name,
                    token_type
                );
            }
        }
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(Theme::named("vscode").unwrap().name, "VS Code");
        assert_eq!(Theme::named("XCODE").unwrap().name, "Xcode");
        assert!(matches!(
            Theme::named("Monokai"),
            Err(GlintError::UnknownTheme(name)) if name == "Monokai"
        ));
    }

    #[test]
    fn test_resolve_appearance() {
        let theme = Theme::xcode();
        let keyword = theme.colour(TokenType::Keyword);
        assert_eq!(keyword.resolve(Appearance::Light), Rgb::new(155, 35, 147));
        assert_eq!(keyword.resolve(Appearance::Dark), Rgb::new(252, 95, 163));
        assert_eq!(theme.colour(TokenType::Plain), DynamicColour::default());
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::new(14, 14, 255).hex(), "#0e0eff");
    }

    #[test]
    fn test_appearance_parse() {
        assert_eq!("Dark".parse::<Appearance>().unwrap(), Appearance::Dark);
        assert!("dim".parse::<Appearance>().is_err());
    }
}
