//! JavaScript grammar

use crate::syntax::builtin::common::{parameter_list_depth, CommentRule, NumberRule, UrlRule};
use crate::syntax::chars::{is_alphanumeric, is_capitalized, is_valid_symbol, starts_with_letter};
use crate::syntax::context::{
    is_generic_constraint, is_prefixed_by_dot_access, is_within_string_literal, GenericAnchors,
};
use crate::syntax::delimiters::{c_family_merge, DelimiterPolicy};
use crate::syntax::grammar::Grammar;
use crate::syntax::rules::SyntaxRule;
use crate::syntax::segment::{is_any, Segment, TokenWindow};
use crate::syntax::tokens::TokenType;

const NON_DELIMITERS: &[char] = &['_', '"', '`', '\'', '#', '@', '$'];

const QUOTES: &[char] = &['"', '`', '\''];

/// Reserved and future-reserved words
const KEYWORDS: &[&str] = &[
    "abstract", "arguments", "async", "await", "boolean", "break", "byte", "case", "catch",
    "char", "class", "const", "continue", "debugger", "default", "delete", "do", "double",
    "else", "enum", "eval", "export", "extends", "false", "final", "finally", "float", "for",
    "function", "goto", "if", "implements", "import", "in", "instanceof", "int", "interface",
    "let", "long", "native", "new", "null", "of", "package", "private", "protected", "public",
    "return", "short", "static", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "typeof", "undefined", "var", "void", "volatile", "while",
    "with", "yield",
];

/// Keywords that may legitimately precede a call
const CALLABLE_AFTER: &[&str] = &[
    "return", "try", "throw", "if", "in", "of", "await", "this", "true", "false", "null",
    "new", "typeof", "void", "yield", "case", "else", "do", "delete",
];

/// Keywords still highlighted in argument position: `f(this, null)`
const VALUE_KEYWORDS: &[&str] = &[
    "this", "let", "var", "const", "true", "false", "null", "undefined", "try", "await",
    "new", "function", "typeof", "void", "async",
];

const DECLARATION_KEYWORDS: &[&str] = &["class", "enum", "interface"];

const CONTROL_FLOW: &[&str] = &["if", "&&", "||", "for", "switch"];

const BUILTIN_TYPES: &[&str] = &[
    "Array", "Boolean", "Date", "Error", "JSON", "Map", "Math", "Number", "Object", "Promise",
    "RegExp", "Set", "String", "Symbol", "WeakMap", "WeakSet",
];

const GENERIC_ANCHORS: GenericAnchors<'static> = GenericAnchors {
    declaration_keywords: DECLARATION_KEYWORDS,
    return_anchors: &["->", ">", ">:"],
    value_anchors: &["=", "==", "===", "(", "_"],
};

/// Create the JavaScript grammar
pub fn javascript_grammar() -> Grammar {
    Grammar::new("JavaScript", DelimiterPolicy::new(NON_DELIMITERS, c_family_merge))
        .with_extensions(&["js", "mjs", "cjs", "jsx"])
        .with_rule(UrlRule)
        .with_rule(CommentRule)
        .with_rule(TemplateStringRule)
        .with_rule(StringRule)
        .with_rule(DecoratorRule)
        .with_rule(NumberRule::new())
        .with_rule(TypeRule { builtin: true })
        .with_rule(TypeRule { builtin: false })
        .with_rule(CallRule)
        .with_rule(PropertyRule)
        .with_rule(DotAccessRule)
        .with_rule(KeywordRule)
        .with_rule(ClassNameRule)
        .with_rule(BindingRule)
        .with_rule(ParameterRule)
}

fn is_keyword(token: &str) -> bool {
    KEYWORDS.contains_token(token)
}

fn first_on_line_is_import(segment: &Segment<'_, '_>) -> bool {
    segment.on_same_line().first().is_some_and(|t| *t == "import")
}

/// Strings spanning lines: an odd number of backtick or `"""` fences so far
struct TemplateStringRule;

impl SyntaxRule for TemplateStringRule {
    fn name(&self) -> &'static str {
        "multiline-string"
    }

    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let history = segment.all();
        history.count_of("\"\"\"") % 2 == 1 || history.count_of("`") % 2 == 1
    }
}

/// String literals delimited on one line by `"`, `'` or a backtick
struct StringRule;

impl SyntaxRule for StringRule {
    fn name(&self) -> &'static str {
        "string"
    }

    fn token_type(&self) -> TokenType {
        TokenType::String
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();
        if QUOTES
            .iter()
            .any(|&q| current.starts_with(q) && current.ends_with(q))
        {
            return true;
        }

        QUOTES.iter().any(|&q| {
            let mut buf = [0u8; 4];
            let quote: &str = q.encode_utf8(&mut buf);
            is_within_string_literal(segment, quote, quote, QUOTES)
        })
    }
}

/// Decorators (`@Component`) and members read off them (`@foo.bar`)
struct DecoratorRule;

impl SyntaxRule for DecoratorRule {
    fn name(&self) -> &'static str {
        "decorator"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Keyword
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if segment.current().starts_with('@') {
            return true;
        }

        if segment.previous() != Some(".") {
            return false;
        }

        let preceding = segment.preceding_on_line();
        preceding.len() >= 2 && preceding[preceding.len() - 2].starts_with('@')
    }
}

/// Capitalized type names; `builtin` selects the standard library set
/// (`type`) or everything else (`otherType`)
struct TypeRule {
    builtin: bool,
}

impl SyntaxRule for TypeRule {
    fn name(&self) -> &'static str {
        if self.builtin {
            "type"
        } else {
            "other-type"
        }
    }

    fn token_type(&self) -> TokenType {
        if self.builtin {
            TokenType::Type
        } else {
            TokenType::OtherType
        }
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        // Names are not highlighted where they are declared
        if segment.previous().is_some_and(|p| DECLARATION_KEYWORDS.contains_token(p)) {
            return false;
        }

        if segment.previous().is_some() && segment.on_same_line().contains_any(DECLARATION_KEYWORDS)
        {
            return false;
        }

        let token = segment.current().trim_matches('_');
        if BUILTIN_TYPES.contains_token(token) != self.builtin {
            return false;
        }

        if !is_capitalized(token) || is_prefixed_by_dot_access(segment) {
            return false;
        }

        if is_any(segment.previous(), &["<", ",", "*/"]) {
            return is_generic_constraint(segment, &GENERIC_ANCHORS);
        }

        true
    }
}

/// Function and method calls: `foo(`, `obj.bar(`
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
        if !starts_with_letter(current.trim_matches('_')) {
            return false;
        }

        // `if(`, `while(`, `function(` read like calls but are not;
        // `promise.catch(` and `map.delete(` are method calls
        let is_member = is_any(segment.previous(), &[".", "?.", "(."]);
        if !is_member
            && is_keyword(current)
            && segment.next().is_some_and(|n| n.starts_with('('))
        {
            return false;
        }

        if let Some(previous) = segment.previous() {
            if is_keyword(previous) && !CALLABLE_AFTER.contains_token(previous) {
                return false;
            }

            // `case .x(` and `, .x(` patterns
            if previous == "." {
                let preceding = segment.preceding_on_line();
                if preceding.len() > 1 {
                    let before_dot = preceding[preceding.len() - 2];
                    if before_dot == "case" || before_dot.ends_with(',') {
                        return false;
                    }
                }
            }
        }

        if segment.trailing_whitespace().is_some() {
            return trailing_block_call(segment);
        }

        segment.next().is_some_and(|n| n.starts_with('('))
    }
}

/// `name {` with whitespace between: a call taking a block, unless the line
/// is a declaration or a control-flow statement
fn trailing_block_call(segment: &Segment<'_, '_>) -> bool {
    if !is_any(segment.next(), &["{", "{}"]) {
        return false;
    }

    if (segment.previous() != Some(".") || segment.preceding_on_line().is_empty())
        && is_keyword(segment.current())
    {
        return false;
    }

    let line = segment.on_same_line();
    !line.contains_any(DECLARATION_KEYWORDS) && !line.contains_any(CONTROL_FLOW)
}

/// `$name` bindings and members read with `.` or `?.`
struct PropertyRule;

impl SyntaxRule for PropertyRule {
    fn name(&self) -> &'static str {
        "property"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Property
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        let current = segment.current();

        if let Some(rest) = current.strip_prefix('$') {
            return rest.chars().next().is_some_and(char::is_alphabetic);
        }

        if segment.preceding_on_line().is_empty() || !is_valid_symbol(current) {
            return false;
        }

        if !is_any(segment.previous(), &[".", "?.", "().", ").", ">."]) {
            return false;
        }

        if current == "this" || is_prefixed_by_dot_access(segment) {
            return false;
        }

        if segment.next().is_some_and(|n| n.starts_with('(')) {
            return false;
        }

        !first_on_line_is_import(segment)
    }
}

/// Members reached through a detached dot: ` .then`, `(.x`, `[.x`
struct DotAccessRule;

impl SyntaxRule for DotAccessRule {
    fn name(&self) -> &'static str {
        "dot-access"
    }

    fn token_type(&self) -> TokenType {
        TokenType::DotAccess
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if segment.preceding_on_line().is_empty() || !is_valid_symbol(segment.current()) {
            return false;
        }

        if !is_any(segment.previous(), &[".", "(.", "[."]) || segment.current() == "this" {
            return false;
        }

        !first_on_line_is_import(segment)
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
        let current = segment.current();
        if !is_keyword(current) {
            return false;
        }

        // Object keys and labels, `default:` aside
        if segment.next() == Some(":") && current != "default" {
            return false;
        }

        if segment.trailing_whitespace().is_none()
            && !is_any(Some(current), &["this", "super"])
            && segment.next() == Some(".")
        {
            return false;
        }

        let Some(previous) = segment.previous() else {
            return true;
        };

        if current != "this" && is_any(Some(previous), &["let", "var", "const"]) {
            return false;
        }

        if DECLARATION_KEYWORDS.contains_token(current) {
            return true;
        }

        // Keyword-named arguments: `f(default, new)`
        if !VALUE_KEYWORDS.contains_token(current) && is_any(Some(previous), &["(", ",", ">("]) {
            return false;
        }

        !is_any(Some(previous), &["function", "`"])
    }
}

/// Class names at their declaration
struct ClassNameRule;

impl SyntaxRule for ClassNameRule {
    fn name(&self) -> &'static str {
        "declaration"
    }

    fn token_type(&self) -> TokenType {
        TokenType::Declaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        segment.previous() == Some("class") && is_alphanumeric(segment.current())
    }
}

/// Names bound by `function`, `var`, `let`, `const`, `case` and `for`
struct BindingRule;

impl SyntaxRule for BindingRule {
    fn name(&self) -> &'static str {
        "other-declaration"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherDeclaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        is_any(
            segment.previous(),
            &["function", "var", "let", "const", "case", "for"],
        ) && is_alphanumeric(segment.current())
    }
}

/// Parameter names in the list of the nearest enclosing `function`
struct ParameterRule;

impl SyntaxRule for ParameterRule {
    fn name(&self) -> &'static str {
        "parameter"
    }

    fn token_type(&self) -> TokenType {
        TokenType::OtherDeclaration
    }

    fn matches(&self, segment: &Segment<'_, '_>) -> bool {
        if !is_alphanumeric(segment.current()) {
            return false;
        }

        if !is_any(segment.previous(), &["(", ","]) {
            return false;
        }

        if is_any(segment.next(), &[".", ".)"]) {
            return false;
        }

        parameter_list_depth(segment.all(), "function") == Some(1)
    }
}
