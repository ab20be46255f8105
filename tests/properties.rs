//! Property-based tests for the highlighting engine.
//!
//! Over generated inputs, for every built-in grammar:
//!
//! 1. **Reconstruction**: concatenating the spans yields the input
//! 2. **Determinism**: two passes assign the same categories
//! 3. **Whitespace forwarding**: whitespace spans hold only whitespace
//! 4. **Output formats**: HTML with tags stripped and unescaped is the input
//!
//! A grammar is also shared between threads and must agree with itself.

use proptest::prelude::*;

use glint::output::HtmlOutputFormat;
use glint::syntax::{Highlighter, Language, SpanKind, TokenType};

// ============================================================================
// Generators
// ============================================================================

/// Fragments that exercise the context heuristics
const FRAGMENTS: &[&str] = &[
    "fn", "let", "function", "class", "return", "x", "Foo", "42", "3.5", "10px", "\"", "'",
    "`", "\\", "/*", "*/", "//", "#", "@", "$", "(", ")", "{", "}", "[", "]", "<", ">", ".",
    ",", ":", ";", "=", "->", "::", "https://example.com", "${", "r#\"", "#[derive(Debug)]",
    "color", "#fff", "rgb(", "px", "-",
];

const SEPARATORS: &[&str] = &["", " ", "  ", "\n", "\t", " \n "];

fn language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::ALL.to_vec())
}

fn code_like() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::sample::select(FRAGMENTS),
            prop::sample::select(SEPARATORS),
        ),
        0..40,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .flat_map(|(fragment, separator)| [fragment, separator])
            .collect()
    })
}

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![code_like(), any::<String>(), "[ -~\n\t]{0,120}"]
}

fn categories(language: Language, source: &str) -> Vec<SpanKind> {
    let grammar = language.grammar();
    Highlighter::new(&grammar)
        .highlight(source)
        .map(|span| span.kind)
        .collect()
}

fn strip_html(html: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn spans_reconstruct_input(language in language(), source in any_text()) {
        let grammar = language.grammar();
        let rebuilt: String = Highlighter::new(&grammar)
            .highlight(&source)
            .map(|span| span.text)
            .collect();
        prop_assert_eq!(rebuilt, source);
    }

    #[test]
    fn highlighting_is_deterministic(language in language(), source in code_like()) {
        prop_assert_eq!(categories(language, &source), categories(language, &source));
    }

    #[test]
    fn whitespace_spans_hold_only_whitespace(language in language(), source in any_text()) {
        let grammar = language.grammar();
        for span in Highlighter::new(&grammar).highlight(&source) {
            let blank = span.text.chars().all(char::is_whitespace);
            prop_assert!(!span.text.is_empty());
            prop_assert_eq!(blank, span.kind == SpanKind::Whitespace, "span {:?}", span.text);
        }
    }

    #[test]
    fn html_preserves_text(language in language(), source in code_like()) {
        let grammar = language.grammar();
        let html = Highlighter::new(&grammar).render(&source, &HtmlOutputFormat::default());
        prop_assert_eq!(strip_html(&html), source);
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn grammar_shared_between_threads() {
    let grammar = Language::JavaScript.grammar();
    let source = "function add(x, y) {\n  return x + y; // sum\n}\n";
    let expected = categories(Language::JavaScript, source);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    Highlighter::new(&grammar)
                        .highlight(source)
                        .map(|span| span.kind)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn url_in_line_comment() {
    for language in [Language::Rust, Language::JavaScript] {
        let grammar = language.grammar();
        let spans: Vec<_> = Highlighter::new(&grammar)
            .highlight("// see https://example.com")
            .filter(|span| span.kind != SpanKind::Whitespace)
            .map(|span| (span.text, span.token_type()))
            .collect();

        assert_eq!(spans[0], ("//", TokenType::Comment));
        assert_eq!(spans[1], ("see", TokenType::Comment));
        assert!(spans[2..].iter().all(|(_, t)| *t == TokenType::Url), "{:?}", spans);
    }
}

#[test]
fn only_whitespace_input() {
    for language in Language::ALL {
        assert_eq!(categories(language, " \n\t\n"), vec![SpanKind::Whitespace]);
    }
}
