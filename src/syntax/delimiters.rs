//! Delimiter policies
//!
//! A policy decides which characters split tokens and which pairs of
//! adjacent delimiter characters fuse into one compound symbol.

/// Ordered merge predicate over (trailing char of current symbol, next char)
pub type MergeFn = fn(char, char) -> bool;

/// Per-grammar tokenization policy
#[derive(Clone, Copy)]
pub struct DelimiterPolicy {
    /// Non-alphanumeric characters that do NOT split tokens
    exceptions: &'static [char],
    /// Merge predicate, consulted only when both characters are delimiters
    merge: MergeFn,
}

impl DelimiterPolicy {
    /// Create a policy from an exception set and a merge predicate
    pub const fn new(exceptions: &'static [char], merge: MergeFn) -> Self {
        Self { exceptions, merge }
    }

    /// Whether `c` splits tokens
    ///
    /// Whitespace is never a delimiter; the tokenizer handles it separately.
    pub fn is_delimiter(&self, c: char) -> bool {
        !c.is_whitespace() && !c.is_alphanumeric() && !self.exceptions.contains(&c)
    }

    /// Whether a symbol ending in `a` should absorb the delimiter `b`
    pub fn can_merge(&self, a: char, b: char) -> bool {
        self.is_delimiter(a) && self.is_delimiter(b) && (self.merge)(a, b)
    }

    /// The exception set
    pub fn exceptions(&self) -> &'static [char] {
        self.exceptions
    }
}

impl std::fmt::Debug for DelimiterPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelimiterPolicy")
            .field("exceptions", &self.exceptions)
            .finish_non_exhaustive()
    }
}

/// Merge predicate shared by the C-family grammars
///
/// Lets `\(` open interpolation and `//`, `/*`, `*/` form comment markers,
/// while refusing merges that would glue a `/` onto surrounding punctuation.
pub fn c_family_merge(a: char, b: char) -> bool {
    match (a, b) {
        ('\\', '(') => true,
        ('\\', _) | (_, '\\') => false,
        (')', _) => false,
        ('/', '/') | ('/', '*') | ('*', '/') => true,
        ('/', _) => false,
        ('(', _) if b != '.' => false,
        ('.', '/') | (',', '/') => false,
        ('{', '/') | ('}', '/') => false,
        ('[', '/') | (']', '/') => false,
        ('>', '/') | ('?', '/') => false,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: DelimiterPolicy = DelimiterPolicy::new(&['_', '"'], c_family_merge);

    #[test]
    fn test_is_delimiter() {
        assert!(POLICY.is_delimiter('('));
        assert!(POLICY.is_delimiter('/'));
        assert!(!POLICY.is_delimiter('_'));
        assert!(!POLICY.is_delimiter('"'));
        assert!(!POLICY.is_delimiter('a'));
        assert!(!POLICY.is_delimiter('7'));
        assert!(!POLICY.is_delimiter(' '));
        assert!(!POLICY.is_delimiter('\n'));
    }

    #[test]
    fn test_merge_is_ordered() {
        assert!(POLICY.can_merge('\\', '('));
        assert!(!POLICY.can_merge('(', '\\'));
        assert!(!POLICY.can_merge('\\', '#'));
        assert!(POLICY.can_merge('/', '*'));
        assert!(POLICY.can_merge('*', '/'));
        assert!(!POLICY.can_merge('/', ';'));
        assert!(!POLICY.can_merge(')', ';'));
        assert!(POLICY.can_merge('(', '.'));
        assert!(!POLICY.can_merge('(', ')'));
    }

    #[test]
    fn test_exceptions_never_merge() {
        assert!(!POLICY.can_merge('_', '_'));
        assert!(!POLICY.can_merge('{', '"'));
    }
}
