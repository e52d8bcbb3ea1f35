//! SQL LIKE patterns.
//!
//! `%` matches any run of characters, `_` matches exactly one, and
//! [`LIKE_ESCAPE`] makes the next character literal. In-memory matching
//! follows SQLite's default: ASCII letters compare case-insensitively,
//! everything else compares exactly. A pattern ending in a lone escape
//! matches nothing.

use serde::{Deserialize, Serialize};

/// Escape character for LIKE patterns (`LIKE ? ESCAPE '\'`).
pub const LIKE_ESCAPE: char = '\\';

/// How a search name becomes a LIKE pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameMatch {
    /// Substring match. Wildcards in the name are escaped.
    #[default]
    Contains,
    /// The name is used verbatim as a LIKE pattern.
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    AnyRun,
    AnyOne,
    Literal(char),
    /// Dangling escape at the end of the pattern.
    Never,
}

/// A LIKE pattern, kept both as text (for binding) and as parsed tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    pattern: String,
    tokens: Vec<Token>,
}

impl LikePattern {
    /// Use `pattern` verbatim.
    #[must_use]
    pub fn raw(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let tokens = tokenize(&pattern);
        Self { pattern, tokens }
    }

    /// Pattern matching any value that contains `text`.
    #[must_use]
    pub fn contains(text: &str) -> Self {
        let mut pattern = String::with_capacity(text.len() + 2);
        pattern.push('%');
        for c in text.chars() {
            if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        Self::raw(pattern)
    }

    /// Build a pattern for a search name.
    #[must_use]
    pub fn for_name(name: &str, mode: NameMatch) -> Self {
        match mode {
            NameMatch::Contains => Self::contains(name),
            NameMatch::Pattern => Self::raw(name),
        }
    }

    /// Pattern text, as bound to the LIKE operator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Evaluate the pattern against `candidate`.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let tokens = &self.tokens;
        if tokens.last() == Some(&Token::Never) {
            return false;
        }
        let text: Vec<char> = candidate.chars().collect();

        let mut t = 0;
        let mut p = 0;
        // Position after the last `%` seen and the text index it is anchored at.
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match tokens.get(p) {
                Some(Token::AnyRun) => {
                    p += 1;
                    backtrack = Some((p, t));
                }
                Some(Token::AnyOne) => {
                    p += 1;
                    t += 1;
                }
                Some(Token::Literal(c)) if chars_equal(*c, text[t]) => {
                    p += 1;
                    t += 1;
                }
                _ => match backtrack {
                    Some((resume, anchor)) => {
                        p = resume;
                        t = anchor + 1;
                        backtrack = Some((resume, anchor + 1));
                    }
                    None => return false,
                },
            }
        }

        tokens[p..].iter().all(|token| *token == Token::AnyRun)
    }
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        let token = match c {
            '%' => Token::AnyRun,
            '_' => Token::AnyOne,
            LIKE_ESCAPE => chars.next().map_or(Token::Never, Token::Literal),
            other => Token::Literal(other),
        };
        if token == Token::AnyRun && tokens.last() == Some(&Token::AnyRun) {
            continue;
        }
        tokens.push(token);
    }
    tokens
}

const fn chars_equal(a: char, b: char) -> bool {
    a.eq_ignore_ascii_case(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("%Bob%", "Bobby", true ; "substring prefix")]
    #[test_case("%Bob%", "Bob", true ; "substring exact")]
    #[test_case("%Bob%", "Alice", false ; "substring missing")]
    #[test_case("Bob", "Bobby", false ; "raw literal is whole value")]
    #[test_case("Bob", "bob", true ; "ascii case insensitive")]
    #[test_case("B_b", "Bab", true ; "single char wildcard")]
    #[test_case("B_b", "Bb", false ; "single char needs one char")]
    #[test_case("%", "", true ; "any run matches empty")]
    #[test_case("", "", true ; "empty matches empty")]
    #[test_case("", "x", false ; "empty matches only empty")]
    #[test_case("a%b%c", "aXXbYYc", true ; "multiple runs")]
    #[test_case("a%b%c", "aXXcYYb", false ; "runs keep order")]
    #[test_case("%ÄÖ%", "xäöx", false ; "non ascii is case sensitive")]
    #[test_case("_", "é", true ; "underscore matches one unicode char")]
    fn raw_patterns(pattern: &str, candidate: &str, expected: bool) {
        assert_eq!(LikePattern::raw(pattern).matches(candidate), expected);
    }

    #[test]
    fn contains_escapes_wildcards() {
        let pattern = LikePattern::contains("50%_off\\");
        assert_eq!(pattern.as_str(), "%50\\%\\_off\\\\%");
        assert!(pattern.matches("get 50%_off\\ now"));
        assert!(!pattern.matches("get 50X_off\\ now"));
        assert!(!pattern.matches("get 50%Xoff\\ now"));
    }

    #[test]
    fn escaped_escape_is_literal() {
        assert!(LikePattern::raw("a\\\\b").matches("a\\b"));
        assert!(!LikePattern::raw("a\\\\b").matches("a\\\\b"));
    }

    #[test_case("a\\", "a\\" ; "literal backslash")]
    #[test_case("a\\", "a" ; "bare prefix")]
    #[test_case("%\\", "x\\" ; "after any run")]
    #[test_case("\\", "" ; "empty candidate")]
    fn trailing_escape_matches_nothing(pattern: &str, candidate: &str) {
        assert!(!LikePattern::raw(pattern).matches(candidate));
    }

    #[test]
    fn for_name_respects_mode() {
        assert_eq!(LikePattern::for_name("Bob", NameMatch::Contains).as_str(), "%Bob%");
        assert_eq!(LikePattern::for_name("Bo%", NameMatch::Pattern).as_str(), "Bo%");
    }

    proptest! {
        #[test]
        fn contains_agrees_with_ascii_substring(
            needle in "[a-zA-Z%_\\\\ ]{0,6}",
            prefix in "[a-zA-Z%_ ]{0,6}",
            suffix in "[a-zA-Z%_ ]{0,6}",
        ) {
            let haystack = format!("{prefix}{needle}{suffix}");
            prop_assert!(LikePattern::contains(&needle).matches(&haystack));
        }

        #[test]
        fn contains_matches_iff_case_folded_substring(
            needle in "[a-c]{0,3}",
            haystack in "[a-cA-C]{0,8}",
        ) {
            let expected = haystack.to_ascii_lowercase().contains(&needle);
            prop_assert_eq!(LikePattern::contains(&needle).matches(&haystack), expected);
        }
    }
}
