//! Word extraction and blank checks shared by the detector and scorers

use regex::Regex;
use std::sync::OnceLock;

static WORD: OnceLock<Regex> = OnceLock::new();

fn word_regex() -> &'static Regex {
    WORD.get_or_init(|| Regex::new(r"[a-zA-Z]+").expect("word pattern is valid"))
}

/// Maximal runs of ASCII letters in already-lowercased text
///
/// Digits, punctuation, whitespace and Devanagari all separate words and
/// never appear inside one.
pub fn words(lowercased: &str) -> impl Iterator<Item = &str> {
    word_regex().find_iter(lowercased).map(|m| m.as_str())
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
#[inline]
pub fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Empty, or made only of [`is_blank_char`] characters
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

/// Whether `text` contains at least one ASCII letter
#[inline]
pub fn has_ascii_letter(text: &str) -> bool {
    text.bytes().any(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<&str> {
        words(text).collect()
    }

    #[test]
    fn test_punctuation_and_digits_split_words() {
        assert_eq!(collect("hello, how are you?"), vec!["hello", "how", "are", "you"]);
        assert_eq!(collect("kal123meeting"), vec!["kal", "meeting"]);
        assert_eq!(collect("it's"), vec!["it", "s"]);
    }

    #[test]
    fn test_devanagari_is_a_separator() {
        assert_eq!(collect("hello कैसे hai"), vec!["hello", "hai"]);
        assert!(collect("मैं आज ऑफिस").is_empty());
    }

    #[test]
    fn test_accented_letters_split_words() {
        assert_eq!(collect("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_blank_text() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\r\n\u{a0}\u{3000}"));
        assert!(is_blank("\u{1c}\u{1d}\u{1e}\u{1f}"));
        assert!(!is_blank(" a "));
        assert!(!is_blank("\u{1b}"));
        assert!(!is_blank("।"));
    }

    #[test]
    fn test_has_ascii_letter() {
        assert!(has_ascii_letter("कैसे a"));
        assert!(!has_ascii_letter("कैसे 123 ?"));
        assert!(!has_ascii_letter(""));
    }
}
