//! The three independent scorers
//!
//! Each scorer is a pure function of the text and a [`Lexicon`] and returns a
//! value in `[0, 100]`:
//!
//! - [`ScriptAnalyzer`]: share of Devanagari characters (Hindi)
//! - [`TokenDictionaryScorer`]: stopwords, common words, suffixes (English)
//! - [`PatternScorer`]: Romanized Hindi words, idioms, script mixing (Hinglish)

pub mod dictionary;
pub mod pattern;
pub mod script;
pub mod tokenize;

use serde::{Deserialize, Serialize};

pub use dictionary::{score_english_tokens, TokenDictionaryScorer};
pub use pattern::{score_hinglish_patterns, PatternEvidence, PatternScorer};
pub use script::{score_hindi_unicode, ScriptAnalyzer};

use crate::lexicon::Lexicon;
use crate::Language;

/// A signal for one language
pub trait Scorer: Send + Sync {
    /// Language this scorer provides evidence for
    fn language(&self) -> Language;

    /// Score in `[0, 100]`
    fn score(&self, text: &str, lexicon: &Lexicon) -> f64;
}

/// One score per scored language
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreSet {
    #[serde(rename = "hindi_score")]
    pub hindi: f64,
    #[serde(rename = "english_score")]
    pub english: f64,
    #[serde(rename = "hinglish_score")]
    pub hinglish: f64,
}

impl ScoreSet {
    pub fn new(hindi: f64, english: f64, hinglish: f64) -> Self {
        Self {
            hindi,
            english,
            hinglish,
        }
    }

    /// Score for `language`; `Unknown` has none and reads as zero
    pub fn get(&self, language: Language) -> f64 {
        match language {
            Language::Hindi => self.hindi,
            Language::English => self.english,
            Language::Hinglish => self.hinglish,
            Language::Unknown => 0.0,
        }
    }

    /// Store the score for `language`; `Unknown` is ignored
    pub fn set(&mut self, language: Language, score: f64) {
        match language {
            Language::Hindi => self.hindi = score,
            Language::English => self.english = score,
            Language::Hinglish => self.hinglish = score,
            Language::Unknown => {}
        }
    }

    pub fn total(&self) -> f64 {
        self.hindi + self.english + self.hinglish
    }

    pub fn max(&self) -> f64 {
        self.hindi.max(self.english).max(self.hinglish)
    }

    /// Language with the highest score
    ///
    /// Ties go to the earliest of Hindi, English, Hinglish, so an all-zero
    /// set reports Hindi.
    pub fn leader(&self) -> Language {
        let mut best = Language::Hindi;
        for language in Language::SCORED {
            if self.get(language) > self.get(best) {
                best = language;
            }
        }
        best
    }

    /// Copy with every score rounded to two decimals
    pub fn rounded(&self) -> Self {
        use crate::aggregate::round2;
        Self::new(round2(self.hindi), round2(self.english), round2(self.hinglish))
    }
}
