//! Locale-aware string comparison for navigation labels.
//!
//! Labels are compared the way a reader expects a table of contents to be
//! ordered, not by code point:
//!
//! ```text
//! "apple" < "Banana" < "cherry"      (case does not dominate)
//! "resume" < "résumé" < "rezone"    (accents only break ties)
//! "10 Tips" < "A Guide"              (digits before letters)
//! "a_b" < "a-b" < "a.b" < "a(b"      (root-locale punctuation order)
//! ```
//!
//! The comparison runs in levels, each consulted only when every earlier level
//! is equal:
//!
//! 1. **Base letters**: characters are decomposed (NFD), combining marks are
//!    dropped and the rest lowercased. Each character is ranked by class
//!    (whitespace, punctuation/symbols, digits, letters) and then by value.
//!    ASCII punctuation follows the CLDR root order; other punctuation and
//!    symbols come after it, by code point.
//! 2. **Accents**: the combining marks of each string, in order.
//! 3. **Case**: lowercase sorts before uppercase at the first difference.
//! 4. **Code points**: a plain byte comparison so the order is total.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two strings with the multi-level collation described above.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| accents(a).cmp(accents(b)))
        .then_with(|| case_flags(a).cmp(case_flags(b)))
        .then_with(|| a.cmp(b))
}

/// ASCII punctuation and symbols in CLDR root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn punctuation_rank(c: char) -> usize {
    PUNCTUATION_ORDER
        .find(c)
        .unwrap_or(PUNCTUATION_ORDER.len())
}

fn primary_keys(s: &str) -> impl Iterator<Item = (u8, usize, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| match char_class(c) {
            1 => (1, punctuation_rank(c), c),
            class => (class, 0, c),
        })
}

fn accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| is_combining_mark(*c))
}

fn case_flags(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut words: Vec<&str>) -> Vec<&str> {
        words.sort_by(|a, b| locale_cmp(a, b));
        words
    }

    #[test]
    fn case_does_not_dominate() {
        assert_eq!(
            sorted(vec!["cherry", "Banana", "apple"]),
            vec!["apple", "Banana", "cherry"]
        );
    }

    #[test]
    fn lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_cmp("alpha", "Alpha"), Ordering::Less);
        assert_eq!(locale_cmp("Alpha", "alpha"), Ordering::Greater);
    }

    #[test]
    fn accents_break_ties_only() {
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_cmp("résumé", "rezone"), Ordering::Less);
    }

    #[test]
    fn digits_before_letters() {
        assert_eq!(locale_cmp("10 Tips", "A Guide"), Ordering::Less);
    }

    #[test]
    fn punctuation_before_digits() {
        assert_eq!(locale_cmp("_draft", "1st"), Ordering::Less);
    }

    #[test]
    fn punctuation_follows_root_order() {
        assert_eq!(locale_cmp("FAQ - Advanced", "FAQ (Old)"), Ordering::Less);
        assert_eq!(locale_cmp("a_b", "a-b"), Ordering::Less);
        assert_eq!(locale_cmp("a.b", "a(b"), Ordering::Less);
        assert_eq!(locale_cmp("api-v2", "api_v2"), Ordering::Greater);
    }

    #[test]
    fn ascii_punctuation_before_other_symbols() {
        assert_eq!(locale_cmp("a$b", "a\u{2022}b"), Ordering::Less);
        assert_eq!(
            sorted(vec!["a/b", "a(b", "a!b", "a.b", "a-b", "a_b"]),
            vec!["a_b", "a-b", "a!b", "a.b", "a(b", "a/b"]
        );
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(locale_cmp("Guide", "Guides"), Ordering::Less);
    }

    #[test]
    fn equal_strings_compare_equal() {
        assert_eq!(locale_cmp("Setup", "Setup"), Ordering::Equal);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn composed_and_decomposed_forms_are_close() {
        // "é" precomposed vs "e" + combining acute: equal at every level but
        // the final code point comparison.
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_ne!(locale_cmp(composed, decomposed), Ordering::Equal);
        assert_eq!(locale_cmp(composed, "cafe"), Ordering::Greater);
        assert_eq!(locale_cmp(decomposed, "cafe"), Ordering::Greater);
    }
}
