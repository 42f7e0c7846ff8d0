//! Hindi likelihood from the share of Devanagari characters

use super::{tokenize, Scorer};
use crate::lexicon::Lexicon;
use crate::Language;

/// Above this share the text is treated as plainly Hindi
const STRONG_RATIO: f64 = 70.0;
/// Below or at this share Devanagari is only a weak signal
const WEAK_RATIO: f64 = 30.0;

const STRONG_BOOST: f64 = 1.2;
const MODERATE_FACTOR: f64 = 0.8;
const WEAK_FACTOR: f64 = 0.3;

/// Scores Hindi from Unicode codepoint ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptAnalyzer;

impl Scorer for ScriptAnalyzer {
    fn language(&self) -> Language {
        Language::Hindi
    }

    fn score(&self, text: &str, lexicon: &Lexicon) -> f64 {
        score_hindi_unicode(text, lexicon)
    }
}

/// Percentage of non-blank characters inside the lexicon's script range
///
/// `None` when every character is blank.
pub fn script_ratio(text: &str, lexicon: &Lexicon) -> Option<f64> {
    let (total, in_script) = text
        .chars()
        .filter(|&c| !tokenize::is_blank_char(c))
        .fold((0usize, 0usize), |(total, hits), c| {
            (total + 1, hits + usize::from(lexicon.is_hindi_script(c)))
        });

    if total == 0 {
        return None;
    }
    Some((in_script as f64 / total as f64) * 100.0)
}

/// Hindi score in `[0, 100]`
///
/// The raw ratio is reshaped in three tiers so that mostly-Devanagari text
/// saturates near 100 while a few borrowed Devanagari words in Latin text
/// stay a weak signal.
pub fn score_hindi_unicode(text: &str, lexicon: &Lexicon) -> f64 {
    let Some(ratio) = script_ratio(text, lexicon) else {
        return 0.0;
    };

    if ratio > STRONG_RATIO {
        (ratio * STRONG_BOOST).min(100.0)
    } else if ratio > WEAK_RATIO {
        ratio * MODERATE_FACTOR
    } else {
        ratio * WEAK_FACTOR
    }
}
