//! Context heuristics shared by the grammars
//!
//! None of these keep lexer state. Each question ("is this token inside a
//! comment?") is answered from scratch by scanning the segment's windows
//! and counting markers, so every rule can ask independently.

use super::chars::ends_with_unescaped;
use super::segment::{Segment, TokenWindow};

/// Tokens that mark the start of a line comment
pub const LINE_COMMENT_MARKERS: &[&str] = &["//", "///"];

/// Tokens that are nothing but comment punctuation
pub const COMMENT_PUNCTUATION: &[&str] = &["*", "/*", "/**", "**/", "*/", "//", "///"];

/// The run of `/` and `*` a token ends with, when nothing follows it
///
/// Leading punctuation may be fused on (`;/*`); anything after the run
/// (`/**/*.{` from a glob) means the token is not a comment marker.
fn marker_run(token: &str) -> Option<&str> {
    let run = token.trim_start_matches(|c: char| c != '/' && c != '*');
    (!run.is_empty() && run.chars().all(|c| c == '/' || c == '*')).then_some(run)
}

fn opens_block_comment(token: &str) -> bool {
    marker_run(token).is_some_and(|run| run.starts_with("/*") && !closes_self(run))
}

fn closes_block_comment(token: &str) -> bool {
    marker_run(token).is_some_and(|run| run.ends_with("*/") && !run.starts_with("/*"))
}

/// `/**/`, `/***/`: opener and closer fused into one token
fn closes_self(run: &str) -> bool {
    run.len() >= 4 && run.starts_with("/*") && run.ends_with("*/")
}

/// Whether the current token is part of a comment
///
/// Block comment state is recovered from the parity of openers and
/// closers seen so far; an unterminated `/*` swallows the rest of the buffer.
pub fn is_within_comment(segment: &Segment<'_, '_>) -> bool {
    let current = segment.current();

    if current.starts_with("/*") || current.starts_with("//") {
        return true;
    }

    if segment.on_same_line().contains_any(LINE_COMMENT_MARKERS) {
        return true;
    }

    if closes_block_comment(current) {
        return true;
    }

    let history = segment.all();
    let opened = history.iter().filter(|t| opens_block_comment(t)).count();
    let closed = history.iter().filter(|t| closes_block_comment(t)).count();
    opened != closed
}

/// Whether the current token lies inside a `start`..`end` literal on this line
///
/// `quotes` are the characters that may open a literal in this grammar; a
/// token beginning with one of them (or with `(`) is skipped when the token
/// before it is a lone backslash.
pub fn is_within_string_literal(
    segment: &Segment<'_, '_>,
    start: &str,
    end: &str,
    quotes: &[char],
) -> bool {
    is_within_string_literal_by(segment, start, end, quotes, |token| token)
}

/// Like [`is_within_string_literal`], viewing every token through `body`
///
/// Grammars with literal prefixes (`r#"`, `b"`) use `body` to strip them.
pub fn is_within_string_literal_by(
    segment: &Segment<'_, '_>,
    start: &str,
    end: &str,
    quotes: &[char],
    body: impl Fn(&str) -> &str,
) -> bool {
    let current = body(segment.current());
    if current.starts_with(start) || ends_with_unescaped(current, end) {
        return true;
    }

    let (mut starts, mut ends) = (0usize, 0usize);
    let mut previous: Option<&str> = None;

    for &raw in segment.preceding_on_line() {
        let token = body(raw);
        let escapable = token.starts_with('(')
            || token.starts_with("#(")
            || token.starts_with(|c: char| quotes.contains(&c));

        if escapable && previous == Some("\\") {
            previous = Some(raw);
            continue;
        }

        if token == start {
            if start != end || starts == ends {
                starts += 1;
            } else {
                ends += 1;
            }
        } else if token == end && start != end {
            ends += 1;
        } else {
            if token.starts_with(start) {
                starts += 1;
            }
            if ends_with_unescaped(token, end) {
                ends += 1;
            }
        }

        previous = Some(raw);
    }

    starts != ends
}

/// Inside a `\(...)` interpolation that has not been closed on this line
///
/// Only the tail after the last `opener` is considered; the paren depth
/// starts at one and must stay positive through the current token, so
/// the closing `)` itself is outside.
pub fn is_within_interpolation(segment: &Segment<'_, '_>, opener: &str) -> bool {
    if segment.current() == opener || segment.previous() == Some(opener) {
        return true;
    }

    let line = segment.on_same_line();
    let Some(last) = line.iter().rposition(|t| *t == opener) else {
        return false;
    };

    let mut depth = 1isize;
    for token in &line[last + 1..] {
        depth += token.matches('(').count() as isize;
        depth -= token.matches(')').count() as isize;

        if depth <= 0 {
            return false;
        }
    }

    true
}

/// Inside a `{` block opened on this line (or directly after a `{`)
pub fn is_within_braces(segment: &Segment<'_, '_>) -> bool {
    if segment.current() == "{" || segment.previous() == Some("{") {
        return true;
    }

    let depth: isize = segment
        .preceding_on_line()
        .iter()
        .map(|t| t.matches('{').count() as isize - t.matches('}').count() as isize)
        .sum();
    depth > 0
}

/// Part of a single-expression raw interpolation, `\#(expr)`
///
/// The opener is spread over three one-character tokens, so this matches
/// fixed windows at the end of the line instead of counting.
pub fn is_within_raw_interpolation(segment: &Segment<'_, '_>) -> bool {
    let preceding = segment.preceding_on_line();

    match segment.current() {
        "\\" => segment.previous() != Some("\\") && segment.next() == Some("#"),
        "#" => segment.previous() == Some("\\") && segment.next() == Some("("),
        "(" => preceding.ends_with_tokens(&["\\", "#"]),
        ")" => {
            let tail = &preceding[preceding.len().saturating_sub(4)..];
            tail.len() >= 3 && tail[..3] == ["\\", "#", "("]
        }
        _ => preceding.ends_with_tokens(&["\\", "#", "("]) && segment.next() == Some(")"),
    }
}

/// Anchors for [`is_generic_constraint`]
pub struct GenericAnchors<'k> {
    /// Keywords that introduce a declaration (`class`, `fn`, `struct`, ...)
    pub declaration_keywords: &'k [&'k str],
    /// Tokens after which generics are ordinary type references (`->`, `>`)
    pub return_anchors: &'k [&'k str],
    /// Tokens that put us in a value position (`=`, `(`)
    pub value_anchors: &'k [&'k str],
}

/// Decide whether a capitalized name following `<` or `,` is a type
/// reference worth highlighting, or a generic parameter being declared
///
/// Walks the full history backwards: an unmatched `<` followed (further
/// back) by a declaration keyword means "declared here"; any anchor
/// reached first means "reference".
pub fn is_generic_constraint(segment: &Segment<'_, '_>, anchors: &GenericAnchors<'_>) -> bool {
    let mut found_opening_bracket = false;

    for &token in segment.all().iter().rev().skip(1) {
        if anchors.return_anchors.contains_token(token) {
            return true;
        }

        if !found_opening_bracket && token == "<" {
            found_opening_bracket = true;
        }

        if found_opening_bracket && (token == ":" || token.starts_with('@')) {
            return true;
        }

        if anchors.declaration_keywords.contains_token(token) {
            return !found_opening_bracket;
        }

        if anchors.value_anchors.contains_token(token) {
            return true;
        }
    }

    true
}

/// Member accessed with a leading dot, `(.foo` or ` .foo`
pub fn is_prefixed_by_dot_access(segment: &Segment<'_, '_>) -> bool {
    segment.previous() == Some("(.") || segment.prefix().ends_with(" .")
}

/// Whether the last space-separated chunk of the prefix begins with a URL scheme
///
/// Splits on a single space only; a URL preceded by a tab or other
/// whitespace is not recognised here.
pub fn prefix_continues_url(segment: &Segment<'_, '_>) -> bool {
    segment
        .prefix()
        .rsplit(' ')
        .next()
        .is_some_and(|chunk| chunk.starts_with("http://") || chunk.starts_with("https://"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::delimiters::{c_family_merge, DelimiterPolicy};
    use crate::syntax::segment::TokenStream;

    const POLICY: DelimiterPolicy = DelimiterPolicy::new(&['_', '"', '\'', '#'], c_family_merge);

    /// Evaluate `check` on the `nth` token whose text is `needle`
    fn at<F: Fn(&Segment<'_, '_>) -> bool>(source: &str, needle: &str, nth: usize, check: F) -> bool {
        let stream = TokenStream::new(source, &POLICY);
        let segment = stream
            .segments()
            .filter(|s| s.current() == needle)
            .nth(nth)
            .expect("token not found");
        check(&segment)
    }

    #[test]
    fn test_comment_parity_across_lines() {
        let source = "a /* b\nc\nd */ e";
        assert!(!at(source, "a", 0, is_within_comment));
        assert!(at(source, "b", 0, is_within_comment));
        assert!(at(source, "c", 0, is_within_comment));
        assert!(at(source, "*/", 0, is_within_comment));
        assert!(!at(source, "e", 0, is_within_comment));
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let source = "x /* never closed\ny z";
        assert!(at(source, "z", 0, is_within_comment));
    }

    #[test]
    fn test_self_closing_comment_token() {
        let source = "/**/ a";
        assert!(at(source, "/**/", 0, is_within_comment));
        assert!(!at(source, "a", 0, is_within_comment));
    }

    #[test]
    fn test_glob_is_not_a_comment_marker() {
        let source = "[\"./src/**/*.{js,jsx}\"],\nlet x = 1;";
        assert!(at(source, "/**/*.{", 0, is_within_comment));
        assert!(!at(source, "js", 0, is_within_comment));
        assert!(!at(source, "let", 0, is_within_comment));
        assert!(!at(source, "x", 0, is_within_comment));
    }

    #[test]
    fn test_fused_leading_punctuation_still_opens() {
        let source = "a;/* b\nc */ d";
        assert!(at(source, "b", 0, is_within_comment));
        assert!(at(source, "c", 0, is_within_comment));
        assert!(!at(source, "d", 0, is_within_comment));
    }

    #[test]
    fn test_line_comment_ends_at_newline() {
        let source = "a // b\nc";
        assert!(at(source, "b", 0, is_within_comment));
        assert!(!at(source, "c", 0, is_within_comment));
    }

    #[test]
    fn test_string_literal_counts() {
        let source = "x = \"a b c\" d";
        let check = |s: &Segment<'_, '_>| is_within_string_literal(s, "\"", "\"", &['"']);
        assert!(at(source, "\"a", 0, check));
        assert!(at(source, "b", 0, check));
        assert!(at(source, "c\"", 0, check));
        assert!(!at(source, "d", 0, check));
        assert!(!at(source, "x", 0, check));
    }

    #[test]
    fn test_string_literal_lone_quote_alternates() {
        let source = "' a ' b";
        let check = |s: &Segment<'_, '_>| is_within_string_literal(s, "'", "'", &['\'']);
        assert!(at(source, "a", 0, check));
        assert!(!at(source, "b", 0, check));
    }

    #[test]
    fn test_string_literal_is_per_line() {
        let source = "\"open\nnext";
        let check = |s: &Segment<'_, '_>| is_within_string_literal(s, "\"", "\"", &['"']);
        assert!(!at(source, "next", 0, check));
    }

    #[test]
    fn test_interpolation_depth() {
        let source = "\"a \\(f(x) y) z\"";
        assert!(at(source, "f", 0, |s| is_within_interpolation(s, "\\(")));
        assert!(at(source, "y", 0, |s| is_within_interpolation(s, "\\(")));
        assert!(at(source, ")", 0, |s| is_within_interpolation(s, "\\(")));
        assert!(!at(source, ")", 1, |s| is_within_interpolation(s, "\\(")));
        assert!(!at(source, "z\"", 0, |s| is_within_interpolation(s, "\\(")));
    }

    #[test]
    fn test_braces_on_line() {
        let source = "a { b { c } d } e";
        assert!(!at(source, "a", 0, is_within_braces));
        assert!(at(source, "b", 0, is_within_braces));
        assert!(at(source, "d", 0, is_within_braces));
        assert!(!at(source, "e", 0, is_within_braces));
    }

    #[test]
    fn test_raw_interpolation_windows() {
        let source = "\"\\#(x)\"";
        assert!(at(source, "#", 0, is_within_raw_interpolation));
        assert!(at(source, "x", 0, is_within_raw_interpolation));
        assert!(at(source, ")", 0, is_within_raw_interpolation));
    }

    #[test]
    fn test_generic_walk() {
        let anchors = GenericAnchors {
            declaration_keywords: &["class", "fn"],
            return_anchors: &["->", ">"],
            value_anchors: &["=", "("],
        };
        assert!(!at("fn f<T>()", "T", 0, |s| is_generic_constraint(s, &anchors)));
        assert!(at("x = Vec<T>", "T", 0, |s| is_generic_constraint(s, &anchors)));
        assert!(at("let v: Vec<T>", "T", 0, |s| is_generic_constraint(s, &anchors)));
        assert!(at("fn f() -> Vec<T>", "T", 0, |s| is_generic_constraint(s, &anchors)));
    }

    #[test]
    fn test_url_prefix_splits_on_space_only() {
        assert!(at("// see https://example.com", "example", 0, prefix_continues_url));
        assert!(!at("//\thttps://example.com", "example", 0, prefix_continues_url));
    }
}
