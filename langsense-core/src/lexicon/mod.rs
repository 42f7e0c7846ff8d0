//! Word lists and script range used by the scorers
//!
//! A [`Lexicon`] is compiled once from a [`LexiconConfig`] and never changes
//! afterwards. Curation produces a new lexicon (see [`CurationSet`]) and
//! [`LexiconHandle`] swaps whole snapshots, so a scorer always reads a fully
//! formed lexicon.

pub mod config;
pub mod curation;
pub mod handle;
pub(crate) mod loader;

use std::collections::{BTreeSet, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Arc;

pub use config::LexiconConfig;
pub use curation::{CuratedPattern, CuratedWord, CurationSet, WordType};
pub use handle::LexiconHandle;

use crate::error::Result;

/// Compiled, read-only lexicon
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    name: String,
    description: String,
    script: RangeInclusive<char>,
    stopwords: HashSet<String>,
    common_words: HashSet<String>,
    suffixes: Vec<String>,
    romanized_hindi: HashSet<String>,
    patterns: Vec<String>,
}

impl Lexicon {
    /// Shared handle to the built-in lexicon
    pub fn embedded() -> Arc<Lexicon> {
        loader::embedded()
    }

    /// TOML source the embedded lexicon is compiled from
    pub fn embedded_toml() -> &'static str {
        loader::DEFAULT_LEXICON_TOML
    }

    /// Parse and compile a lexicon from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        loader::from_toml_str(toml_str)
    }

    /// Load and compile a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        loader::from_file(path.as_ref())
    }

    /// Create from configuration
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        config.validate()?;

        let start = config.script.range_start;
        let end = config.script.range_end;
        // validate() guarantees both ends are scalar values
        let script = match (char::from_u32(start), char::from_u32(end)) {
            (Some(s), Some(e)) => s..=e,
            _ => return Err(crate::LexiconError::InvalidRange { start, end }),
        };

        Ok(Self {
            name: config.metadata.name.clone(),
            description: config.metadata.description.clone(),
            script,
            stopwords: fold(&config.english.stopwords),
            common_words: fold(&config.english.common_words),
            suffixes: dedup_ordered(&config.english.suffixes),
            romanized_hindi: fold(&config.hinglish.romanized_words),
            patterns: dedup_ordered(&config.hinglish.patterns),
        })
    }

    /// Export back to the TOML schema; set contents come out sorted
    pub fn to_config(&self) -> LexiconConfig {
        LexiconConfig {
            metadata: config::Metadata {
                name: self.name.clone(),
                description: self.description.clone(),
            },
            script: config::ScriptRange {
                range_start: *self.script.start() as u32,
                range_end: *self.script.end() as u32,
            },
            english: config::EnglishLists {
                stopwords: sorted(&self.stopwords),
                common_words: sorted(&self.common_words),
                suffixes: self.suffixes.clone(),
            },
            hinglish: config::HinglishLists {
                romanized_words: sorted(&self.romanized_hindi),
                patterns: self.patterns.clone(),
            },
        }
    }

    /// Lexicon name from its metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether `ch` falls in the Hindi script range
    #[inline]
    pub fn is_hindi_script(&self, ch: char) -> bool {
        self.script.contains(&ch)
    }

    pub fn script_range(&self) -> &RangeInclusive<char> {
        &self.script
    }

    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    #[inline]
    pub fn is_common_word(&self, token: &str) -> bool {
        self.common_words.contains(token)
    }

    /// Longer than three letters and ending with an English suffix
    pub fn has_english_suffix(&self, token: &str) -> bool {
        token.len() > 3 && self.suffixes.iter().any(|s| token.ends_with(s.as_str()))
    }

    #[inline]
    pub fn is_romanized_hindi(&self, token: &str) -> bool {
        self.romanized_hindi.contains(token)
    }

    /// Hinglish phrases in configuration order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn common_word_count(&self) -> usize {
        self.common_words.len()
    }

    pub fn romanized_word_count(&self) -> usize {
        self.romanized_hindi.len()
    }

    pub(crate) fn romanized_hindi_mut(&mut self) -> &mut HashSet<String> {
        &mut self.romanized_hindi
    }

    pub(crate) fn patterns_mut(&mut self) -> &mut Vec<String> {
        &mut self.patterns
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::embedded().as_ref().clone()
    }
}

fn fold(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_ascii_lowercase()).collect()
}

fn dedup_ordered(entries: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| seen.insert(e.clone()))
        .collect()
}

fn sorted(set: &HashSet<String>) -> Vec<String> {
    set.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lexicon_shape() {
        let lexicon = Lexicon::embedded();
        assert_eq!(lexicon.name(), "default");
        assert_eq!(lexicon.script_range(), &('\u{0900}'..='\u{097F}'));
        assert!((60..=80).contains(&lexicon.stopword_count()));
        assert!(lexicon.common_word_count() >= 20);
        assert!(lexicon.romanized_word_count() >= 45);
        assert_eq!(lexicon.patterns().len(), 18);
        assert_eq!(lexicon.patterns()[0], "ja raha");
    }

    #[test]
    fn test_embedded_is_shared() {
        let a = Lexicon::embedded();
        let b = Lexicon::embedded();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_entries_are_case_folded() {
        let lexicon = Lexicon::from_toml_str(
            r#"
[english]
stopwords = ["The", "AND"]
common_words = ["Hello"]

[hinglish]
romanized_words = ["Hai"]
patterns = ["Ja Raha", "ja raha"]
"#,
        )
        .unwrap();

        assert!(lexicon.is_stopword("the"));
        assert!(lexicon.is_stopword("and"));
        assert!(lexicon.is_common_word("hello"));
        assert!(lexicon.is_romanized_hindi("hai"));
        assert_eq!(lexicon.patterns(), ["ja raha"]);
    }

    #[test]
    fn test_suffix_requires_more_than_three_letters() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.has_english_suffix("coding"));
        assert!(lexicon.has_english_suffix("nation"));
        assert!(lexicon.has_english_suffix("quickly"));
        assert!(!lexicon.has_english_suffix("bed"));
        assert!(!lexicon.has_english_suffix("ing"));
        assert!(!lexicon.has_english_suffix("hello"));
    }

    #[test]
    fn test_script_membership() {
        let lexicon = Lexicon::embedded();
        assert!(lexicon.is_hindi_script('क'));
        assert!(lexicon.is_hindi_script('\u{0900}'));
        assert!(lexicon.is_hindi_script('\u{097F}'));
        assert!(!lexicon.is_hindi_script('\u{0980}'));
        assert!(!lexicon.is_hindi_script('a'));
    }

    #[test]
    fn test_config_round_trip_preserves_lexicon() {
        let lexicon = Lexicon::embedded();
        let rebuilt = Lexicon::from_config(&lexicon.to_config()).unwrap();
        assert_eq!(&rebuilt, lexicon.as_ref());
    }
}
