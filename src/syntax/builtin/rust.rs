//! Rust grammar
//!
//! The default grammar. Literal prefixes (`b"`, `r#"`), char literals,
//! lifetimes and escapes are kept whole by the delimiter exceptions, so
//! most rules inspect a single token.

use crate::syntax::builtin::common::{parameter_list_depth, CommentRule, UrlRule};
use crate::syntax::chars::{is_capitalized, is_identifier};
use crate::syntax::context::{is_generic_constraint, is_within_string_literal_by, GenericAnchors};
use crate::syntax::delimiters::DelimiterPolicy;
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::SyntaxRule;
use crate::syntax::segment::{is_any, Segment, TokenWindow};
use crate::syntax::tokens::TokenType;

const NON_DELIMITERS: &[char] = &['_', '"', '\'', '\\', '#'];

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "union", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

const PRIMITIVES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64", "bool", "char", "str",
];

/// Keywords whose next identifier is a type being declared
const TYPE_DECLARATIONS: &[&str] = &["struct", "enum", "trait", "type", "union"];

/// Keywords whose next identifier is a function, binding or module being declared
const BINDINGS: &[&str] = &["fn", "let", "const", "static", "mod"];

const GENERIC_ANCHORS: GenericAnchors<'static> = GenericAnchors {
    declaration_keywords: &["struct", "enum", "trait", "type", "union", "fn", "impl"],
    return_anchors: &["->", ">", "=>"],
    value_anchors: &["=", "==", "(", "{", ";"],
};

/// Create the Rust grammar
pub fn rust_grammar() -> Grammar {
    Grammar::new("Rust", DelimiterPolicy::new(NON_DELIMITERS, rust_merge))
        .with_extensions(&["rs"])
        .with_rule(UrlRule)
        .with_rule(CommentRule)
        .with_rule(AttributeRule)
        .with_rule(StringRule)
        .with_rule(CharRule)
        .with_rule(LifetimeRule)
        .with_rule(NumberRule)
        .with_rule(MacroRule)
        .with_rule(PrimitiveRule)
        .with_rule(TypeNameRule)
        .with_rule(CallRule)
        .with_rule(FieldRule)
        .with_rule(KeywordRule)
        .with_rule(TypeDeclarationRule)
        .with_rule(BindingRule)
        .with_rule(ParameterRule)
}

/// Multi-character operators; every other pair of delimiters stays split
pub fn rust_merge(a: char, b: char) -> bool {
    matches!(
        (a, b),
        ('/', '/') | ('/', '*') | ('*', '/')
            | (':', ':')
            // `://` so URL schemes in comments stay one token
            | (':', '/')
            | ('-', '>')
            | ('=', '>')
            | ('=' | '!' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '^' | '|' | '&', '=')
            | ('&', '&')
            | ('|', '|')
            | ('.', '.')
            | ('.', '=')
    )
}

fn is_keyword(token: &str) -> bool {
    KEYWORDS.contains_token(token)
}

/// The identifier right after a declaring keyword (`struct Foo`, `let mut x`)
fn is_declared_name(segment: &Segment<'_, '_>) -> bool {
    let Some(previous) = segment.previous() else {
        return false;
    };

    if TYPE_DECLARATIONS.contains_token(previous) || BINDINGS.contains_token(previous) {
        return true;
    }

    if previous != "mut" {
        return false;
    }

    let history = segment.all();
    history.len() >= 3 && is_any(Some(history[history.len() - 3]), &["let", "static"])
}

/// Strip literal prefixes and raw-string hashes: `br#"x"#` is viewed as `"x"`
fn literal_body(token: &str) -> &str {
    let stripped = token.strip_prefix('b').unwrap_or(token);
    let stripped = stripped.strip_prefix('r').unwrap_or(stripped);
    let stripped = stripped.trim_start_matches('#');
    let body = if stripped.starts_with('"') {
        stripped
    } else {
        token
    };

    let trimmed = body.trim_end_matches('#');
    if trimmed.ends_with('"') {
        trimmed
    } else {
        body
    }
}

/// `#[...]` and `#![...]` on the current line, brackets included
struct AttributeRule;

impl SyntaxRule for AttributeRule {
    fn name(&self) -> &'static str {
        "attribute"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Preprocessing
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if segment.current() == "#" {
            return is_any(segment.next(), &["[", "!"]);
        }

        let window = segment.on_same_line();
        let Some(hash) = window.iter().rposition(|t| *t == "#") else {
            return false;
        };

        let mut rest = &window[hash + 1..];
        if rest.first().is_some_and(|t| *t == "!") {
            rest = &rest[1..];
        }

        // The current token is the `!` of `#!`
        if rest.is_empty() {
            return segment.next() == Some("[");
        }

        if rest[0] != "[" {
            return false;
        }

        let mut depth = 0isize;
        for token in &rest[..rest.len() - 1] {
            match *token {
                "[" => depth += 1,
                "]" => depth -= 1,
                _ => {}
            }
            if depth == 0 {
                return false;
            }
        }

        true
    }
}

/// String literals, byte strings and raw strings
struct StringRule;

impl SyntaxRule for StringRule {
    fn name(&self) -> &'static str {
        "string"
    }

    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_within_string_literal_by(segment, "\"", "\"", &['"'], literal_body)
    }
}

/// Char and byte literals
///
/// `'x'` and `'\n'` are single tokens. A delimiter between quotes (`'{'`)
/// splits into three, and a lone `'` token only ever comes from such a split.
struct CharRule;

impl SyntaxRule for CharRule {
    fn name(&self) -> &'static str {
        "char"
    }

    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        let body = current.strip_prefix('b').unwrap_or(current);

        if body == "'" {
            return true;
        }

        if body.len() >= 3 && body.starts_with('\'') && body.ends_with('\'') {
            return true;
        }

        segment.previous() == Some("'") && segment.next() == Some("'")
    }
}

/// `'a`, `'static`, loop labels
struct LifetimeRule;

impl SyntaxRule for LifetimeRule {
    fn name(&self) -> &'static str {
        "lifetime"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        segment
            .current()
            .strip_prefix('\'')
            .is_some_and(is_identifier)
    }
}

/// Integer and float literals with radix prefixes, separators and suffixes
struct NumberRule;

impl SyntaxRule for NumberRule {
    fn name(&self) -> &'static str {
        "number"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Number
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let starts_with_digit = |t: &str| t.starts_with(|c: char| c.is_ascii_digit());
        let current = segment.current();

        if starts_with_digit(current) {
            return current.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        }

        current == "."
            && segment.previous().is_some_and(starts_with_digit)
            && segment.next().is_some_and(starts_with_digit)
    }
}

/// Macro invocations: `println!(`, `vec![`
struct MacroRule;

impl SyntaxRule for MacroRule {
    fn name(&self) -> &'static str {
        "macro"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Call
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();

        if is_identifier(current) {
            return segment.next() == Some("!") && segment.trailing_whitespace().is_none();
        }

        if current != "!" || !is_any(segment.next(), &["(", "[", "{"]) {
            return false;
        }

        segment
            .previous()
            .is_some_and(|p| is_identifier(p) && segment.prefix().ends_with(p))
    }
}

struct PrimitiveRule;

impl SyntaxRule for PrimitiveRule {
    fn name(&self) -> &'static str {
        "type"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Type
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        PRIMITIVES.contains_token(segment.current())
    }
}

/// Capitalized names in type position
///
/// Generic parameters at their declaration (`fn f<T>`) are skipped; their
/// bounds and every later use are highlighted.
struct TypeNameRule;

impl SyntaxRule for TypeNameRule {
    fn name(&self) -> &'static str {
        "other-type"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherType
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        if current == "Self" || !is_capitalized(current) || !is_identifier(current) {
            return false;
        }

        if is_declared_name(segment) {
            return false;
        }

        if is_any(segment.previous(), &["<", ","]) {
            return is_generic_constraint(segment, &GENERIC_ANCHORS);
        }

        true
    }
}

/// Function and method calls
struct CallRule;

impl SyntaxRule for CallRule {
    fn name(&self) -> &'static str {
        "call"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Call
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();

        is_identifier(current)
            && !is_keyword(current)
            && segment.trailing_whitespace().is_none()
            && segment.next() == Some("(")
            && segment.previous() != Some("fn")
    }
}

/// Field access: `self.name`
struct FieldRule;

impl SyntaxRule for FieldRule {
    fn name(&self) -> &'static str {
        "property"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Property
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();

        segment.previous() == Some(".")
            && is_identifier(current)
            && !is_keyword(current)
            && segment.next() != Some("(")
    }
}

struct KeywordRule;

impl SyntaxRule for KeywordRule {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_keyword(segment.current())
    }
}

/// Names introduced by `struct`, `enum`, `trait`, `type` and `union`
struct TypeDeclarationRule;

impl SyntaxRule for TypeDeclarationRule {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Declaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_identifier(segment.current())
            && segment
                .previous()
                .is_some_and(|p| TYPE_DECLARATIONS.contains_token(p))
    }
}

/// Functions, bindings, constants, statics and modules at their declaration
struct BindingRule;

impl SyntaxRule for BindingRule {
    fn name(&self) -> &'static str {
        "other-declaration"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherDeclaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_identifier(segment.current()) && is_declared_name(segment)
    }
}

/// Parameter names in the signature of the nearest preceding `fn`
struct ParameterRule;

impl SyntaxRule for ParameterRule {
    fn name(&self) -> &'static str {
        "parameter"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherDeclaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_identifier(segment.current())
            && segment.next() == Some(":")
            && is_any(segment.previous(), &["(", ",", "mut"])
            && parameter_list_depth(segment.all(), "fn") == Some(1)
    }
}
