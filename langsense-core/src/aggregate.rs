//! Turns three independent scores into one confidence and a percentage split

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreSet;

/// Leading scores above this get the dominance boost
const DOMINANCE_THRESHOLD: f64 = 50.0;
const DOMINANCE_BOOST: f64 = 1.1;

/// Share of the total score held by each language, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(rename = "hindi_percentage")]
    pub hindi: f64,
    #[serde(rename = "english_percentage")]
    pub english: f64,
    #[serde(rename = "hinglish_percentage")]
    pub hinglish: f64,
}

impl Breakdown {
    pub fn sum(&self) -> f64 {
        self.hindi + self.english + self.hinglish
    }
}

/// Combines a [`ScoreSet`] into a decision confidence
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceAggregator;

impl ConfidenceAggregator {
    /// Confidence in `[0, 100]`, rounded to two decimals
    ///
    /// The leading score's share of the total, boosted by 10% when the leading
    /// score itself exceeds 50. Zero when every score is zero.
    pub fn confidence(&self, scores: &ScoreSet) -> f64 {
        let total = scores.total();
        if total <= 0.0 {
            return 0.0;
        }

        let max = scores.max();
        let mut confidence = (max / total) * 100.0;
        if max > DOMINANCE_THRESHOLD {
            confidence = (confidence * DOMINANCE_BOOST).min(100.0);
        }
        round2(confidence)
    }

    /// Percentage split, each rounded to two decimals; all zero for a zero total
    pub fn breakdown(&self, scores: &ScoreSet) -> Breakdown {
        let total = scores.total();
        if total <= 0.0 {
            return Breakdown::default();
        }

        let share = |score: f64| round2((score / total) * 100.0);
        Breakdown {
            hindi: share(scores.hindi),
            english: share(scores.english),
            hinglish: share(scores.hinglish),
        }
    }
}

/// Round half away from zero to two decimals
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
