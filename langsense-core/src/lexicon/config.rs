//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon files.

use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, Result};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub script: ScriptRange,
    pub english: EnglishLists,
    pub hinglish: HinglishLists,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: "custom".to_string(),
            description: String::new(),
        }
    }
}

/// Codepoint range counted as Hindi script
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScriptRange {
    pub range_start: u32,
    pub range_end: u32,
}

impl Default for ScriptRange {
    fn default() -> Self {
        Self {
            range_start: 0x0900,
            range_end: 0x097F,
        }
    }
}

/// English word lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnglishLists {
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub common_words: Vec<String>,
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

/// Romanized Hindi words and idiomatic phrases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HinglishLists {
    pub romanized_words: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
}

fn default_suffixes() -> Vec<String> {
    ["ing", "ed", "ly", "tion"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let ScriptRange {
            range_start,
            range_end,
        } = self.script;
        if range_start > range_end
            || char::from_u32(range_start).is_none()
            || char::from_u32(range_end).is_none()
        {
            return Err(LexiconError::InvalidRange {
                start: range_start,
                end: range_end,
            });
        }

        if self.english.stopwords.is_empty() {
            return Err(LexiconError::EmptyList("english.stopwords"));
        }
        if self.hinglish.romanized_words.is_empty() {
            return Err(LexiconError::EmptyList("hinglish.romanized_words"));
        }

        check_words("english.stopwords", &self.english.stopwords)?;
        check_words("english.common_words", &self.english.common_words)?;
        check_words("english.suffixes", &self.english.suffixes)?;
        check_words("hinglish.romanized_words", &self.hinglish.romanized_words)?;

        for pattern in &self.hinglish.patterns {
            check_phrase("hinglish.patterns", pattern)?;
        }

        Ok(())
    }
}

/// Entries matched against tokens must be made of ASCII letters only
pub(crate) fn check_word(list: &'static str, word: &str) -> Result<()> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(LexiconError::InvalidEntry {
            list,
            entry: word.to_string(),
            reason: "only ASCII letters are allowed",
        });
    }
    Ok(())
}

pub(crate) fn check_phrase(list: &'static str, phrase: &str) -> Result<()> {
    if phrase.trim().is_empty() {
        return Err(LexiconError::InvalidEntry {
            list,
            entry: phrase.to_string(),
            reason: "phrase is blank",
        });
    }
    Ok(())
}

fn check_words(list: &'static str, words: &[String]) -> Result<()> {
    words.iter().try_for_each(|w| check_word(list, w))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> LexiconConfig {
        toml::from_str(
            r#"
[english]
stopwords = ["the"]

[hinglish]
romanized_words = ["hai"]
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_fill_optional_sections() {
        let config = minimal();
        assert_eq!(config.script.range_start, 0x0900);
        assert_eq!(config.script.range_end, 0x097F);
        assert_eq!(config.english.suffixes, vec!["ing", "ed", "ly", "tion"]);
        assert!(config.hinglish.patterns.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let mut config = minimal();
        config.script = ScriptRange {
            range_start: 0x097F,
            range_end: 0x0900,
        };
        assert!(matches!(
            config.validate(),
            Err(LexiconError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_surrogate_range_is_rejected() {
        let mut config = minimal();
        config.script = ScriptRange {
            range_start: 0xD800,
            range_end: 0xDFFF,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_stopwords_are_rejected() {
        let mut config = minimal();
        config.english.stopwords.clear();
        assert!(matches!(
            config.validate(),
            Err(LexiconError::EmptyList("english.stopwords"))
        ));
    }

    #[test]
    fn test_non_letter_word_is_rejected() {
        let mut config = minimal();
        config.hinglish.romanized_words.push("ja-na".to_string());
        assert!(matches!(
            config.validate(),
            Err(LexiconError::InvalidEntry {
                list: "hinglish.romanized_words",
                ..
            })
        ));
    }

    #[test]
    fn test_blank_pattern_is_rejected() {
        let mut config = minimal();
        config.hinglish.patterns.push("   ".to_string());
        assert!(config.validate().is_err());
    }
}
