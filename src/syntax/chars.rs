//! Character-class predicates over token text
//!
//! These run on every token for every rule, so they are plain
//! membership tests rather than patterns.

/// ASCII letters, digits, `-` and `_`
pub fn is_alphanumeric(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// ASCII letters, digits and `-`
pub fn is_alphanumeric_dash(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Parses as a number and contains at least one digit
///
/// The digit requirement keeps `inf` and `NaN` out.
pub fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit()) && token.parse::<f64>().is_ok()
}

/// First character is uppercase
pub fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

/// First character is a letter
pub fn starts_with_letter(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_alphabetic)
}

/// First character can begin an identifier (`_`, `$` or a letter)
pub fn is_valid_symbol(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c == '_' || c == '$' || c.is_alphabetic())
}

/// `_` or a letter followed by letters, digits and `_`
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Ends with `end`, and that marker is not escaped by an odd run of backslashes
pub fn ends_with_unescaped(token: &str, end: &str) -> bool {
    match token.strip_suffix(end) {
        Some(rest) => rest.chars().rev().take_while(|&c| c == '\\').count() % 2 == 0,
        None => false,
    }
}

/// Remove every occurrence of `pattern` from `token`
pub fn removing(token: &str, pattern: &str) -> String {
    token.replace(pattern, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("foo_bar-1"));
        assert!(!is_alphanumeric(""));
        assert!(!is_alphanumeric("$foo"));
        assert!(!is_alphanumeric("é"));
    }

    #[test]
    fn test_alphanumeric_dash() {
        assert!(is_alphanumeric_dash("font-size"));
        assert!(!is_alphanumeric_dash("foo_bar"));
        assert!(!is_alphanumeric_dash("#fff"));
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("42"));
        assert!(is_number("-1"));
        assert!(is_number("1e5"));
        assert!(!is_number("inf"));
        assert!(!is_number("NaN"));
        assert!(!is_number("0xFF"));
        assert!(!is_number(""));
    }

    #[test]
    fn test_capitalized_and_letters() {
        assert!(is_capitalized("Foo"));
        assert!(!is_capitalized("foo"));
        assert!(!is_capitalized("_Foo"));
        assert!(starts_with_letter("foo"));
        assert!(!starts_with_letter("1foo"));
        assert!(is_valid_symbol("$el"));
        assert!(is_valid_symbol("_x"));
        assert!(!is_valid_symbol("."));
    }

    #[test]
    fn test_identifier() {
        assert!(is_identifier("snake_case"));
        assert!(is_identifier("_"));
        assert!(is_identifier("T2"));
        assert!(!is_identifier("2x"));
        assert!(!is_identifier("'a"));
        assert!(!is_identifier("font-size"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_ends_with_unescaped() {
        assert!(ends_with_unescaped("abc\"", "\""));
        assert!(!ends_with_unescaped("abc\\\"", "\""));
        assert!(ends_with_unescaped("abc\\\\\"", "\""));
        assert!(!ends_with_unescaped("abc", "\""));
    }
}
