//! Curated Romanized Hindi words and phrases
//!
//! A [`CurationSet`] is the editable side of the lexicon: words and phrases
//! an administrator adds, ranks and switches on or off. Applying it never
//! touches an existing [`Lexicon`]; it yields a new one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::config::{check_phrase, check_word};
use super::Lexicon;
use crate::error::{LexiconError, Result};

/// Part of speech of a curated word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    Verb,
    Noun,
    Adjective,
    Particle,
    Expression,
}

/// A Romanized Hindi word under curation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedWord {
    pub word: String,
    pub word_type: WordType,
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A Hinglish phrase under curation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedPattern {
    pub phrase: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Curated entries to merge into a lexicon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurationSet {
    #[serde(default)]
    pub words: Vec<CuratedWord>,
    #[serde(default)]
    pub patterns: Vec<CuratedPattern>,
}

fn default_frequency() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

impl CuratedWord {
    pub fn new(word: impl Into<String>, word_type: WordType) -> Self {
        Self {
            word: word.into(),
            word_type,
            frequency: default_frequency(),
            is_active: true,
        }
    }
}

impl CurationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a curation set from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let set: CurationSet = toml::from_str(toml_str)?;
        set.validate()?;
        Ok(set)
    }

    /// Load a curation set file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Add a word, or replace the entry with the same spelling
    pub fn upsert_word(&mut self, entry: CuratedWord) {
        match self
            .words
            .iter_mut()
            .find(|w| w.word.eq_ignore_ascii_case(&entry.word))
        {
            Some(existing) => *existing = entry,
            None => self.words.push(entry),
        }
    }

    /// Add an active phrase unless it is already listed
    pub fn add_pattern(&mut self, phrase: impl Into<String>) {
        let phrase = phrase.into();
        if !self
            .patterns
            .iter()
            .any(|p| p.phrase.trim().eq_ignore_ascii_case(phrase.trim()))
        {
            self.patterns.push(CuratedPattern {
                phrase,
                is_active: true,
            });
        }
    }

    /// Switch words on or off; returns how many entries changed
    pub fn set_active(&mut self, words: &[&str], active: bool) -> usize {
        let mut updated = 0;
        for entry in self.words.iter_mut() {
            if entry.is_active != active && words.iter().any(|w| entry.word.eq_ignore_ascii_case(w))
            {
                entry.is_active = active;
                updated += 1;
            }
        }
        updated
    }

    /// Words ordered by descending frequency, then alphabetically
    pub fn ranked_words(&self) -> Vec<&CuratedWord> {
        let mut ranked: Vec<&CuratedWord> = self.words.iter().collect();
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word.cmp(&b.word)));
        ranked
    }

    pub fn active_words(&self) -> impl Iterator<Item = &CuratedWord> {
        self.words.iter().filter(|w| w.is_active)
    }

    pub fn validate(&self) -> Result<()> {
        for entry in &self.words {
            check_word("words", &entry.word)?;
        }
        for entry in &self.patterns {
            check_phrase("patterns", &entry.phrase)?;
        }
        Ok(())
    }

    /// Build a new lexicon with this set merged into `base`
    ///
    /// Active entries are added and inactive entries are removed. New phrases
    /// go to the end of the pattern list; existing order is kept.
    pub fn apply(&self, base: &Lexicon) -> Result<Lexicon> {
        self.validate()?;

        let mut lexicon = base.clone();
        let mut added = 0usize;
        let mut removed = 0usize;

        {
            let words = lexicon.romanized_hindi_mut();
            for entry in &self.words {
                let word = entry.word.to_ascii_lowercase();
                if entry.is_active {
                    added += usize::from(words.insert(word));
                } else {
                    removed += usize::from(words.remove(&word));
                }
            }
        }

        {
            let patterns = lexicon.patterns_mut();
            for entry in &self.patterns {
                let phrase = entry.phrase.trim().to_lowercase();
                let position = patterns.iter().position(|p| *p == phrase);
                match (entry.is_active, position) {
                    (true, None) => {
                        patterns.push(phrase);
                        added += 1;
                    }
                    (false, Some(index)) => {
                        patterns.remove(index);
                        removed += 1;
                    }
                    _ => {}
                }
            }
        }

        if lexicon.romanized_word_count() == 0 {
            return Err(LexiconError::EmptyList("hinglish.romanized_words"));
        }

        tracing::debug!(added, removed, "applied curation set");
        Ok(lexicon)
    }
}

impl Lexicon {
    /// Shorthand for [`CurationSet::apply`]
    pub fn with_curation(&self, set: &CurationSet) -> Result<Lexicon> {
        set.apply(self)
    }
}
