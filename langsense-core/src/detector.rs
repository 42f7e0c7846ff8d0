//! Detection facade

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aggregate::{Breakdown, ConfidenceAggregator};
use crate::config::DetectorBuilder;
use crate::lexicon::Lexicon;
use crate::scoring::{
    tokenize, PatternScorer, ScoreSet, Scorer, ScriptAnalyzer, TokenDictionaryScorer,
};
use crate::Language;

const SCORERS: [&dyn Scorer; 3] = [&ScriptAnalyzer, &TokenDictionaryScorer, &PatternScorer];

/// Outcome of one detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Winning label
    pub language: Language,
    /// Confidence in the label, `[0, 100]`
    pub confidence: f64,
    /// Raw per-language scores, rounded to two decimals
    #[serde(flatten)]
    pub scores: ScoreSet,
    /// Share of the total score per language
    pub breakdown: Breakdown,
}

impl DetectionResult {
    /// Result for blank input
    pub fn unknown() -> Self {
        Self {
            language: Language::Unknown,
            confidence: 0.0,
            scores: ScoreSet::default(),
            breakdown: Breakdown::default(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.language == Language::Unknown
    }
}

/// Classifies text as Hindi, English or Hinglish
///
/// Cheap to clone; clones share the same lexicon snapshot. A detector never
/// changes its lexicon, so results are deterministic for one instance.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    lexicon: Arc<Lexicon>,
    aggregator: ConfidenceAggregator,
}

impl LanguageDetector {
    /// Detector over the embedded default lexicon
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::embedded())
    }

    /// Detector over a caller-supplied lexicon
    pub fn with_lexicon(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self {
            lexicon: lexicon.into(),
            aggregator: ConfidenceAggregator,
        }
    }

    /// Create a builder
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::new()
    }

    /// Lexicon snapshot this detector reads
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Unrounded scores from every scorer
    pub fn scores(&self, text: &str) -> ScoreSet {
        let mut scores = ScoreSet::default();
        for scorer in SCORERS {
            let score = scorer.score(text, &self.lexicon);
            tracing::trace!(language = %scorer.language(), score, "scorer result");
            scores.set(scorer.language(), score);
        }
        scores
    }

    /// Detect the language of `text`
    ///
    /// Blank input is `Unknown` with zero confidence. Anything else gets one
    /// of the three scored labels, even when no scorer found any evidence.
    pub fn detect(&self, text: &str) -> DetectionResult {
        if tokenize::is_blank(text) {
            return DetectionResult::unknown();
        }

        let scores = self.scores(text);
        let language = scores.leader();
        let confidence = self.aggregator.confidence(&scores);
        let breakdown = self.aggregator.breakdown(&scores);

        tracing::debug!(
            %language,
            confidence,
            hindi = scores.hindi,
            english = scores.english,
            hinglish = scores.hinglish,
            "detected language"
        );

        DetectionResult {
            language,
            confidence,
            scores: scores.rounded(),
            breakdown,
        }
    }

    /// Detect many snippets; results keep input order
    #[cfg(feature = "parallel")]
    pub fn detect_batch<S>(&self, texts: &[S]) -> Vec<DetectionResult>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;
        texts.par_iter().map(|t| self.detect(t.as_ref())).collect()
    }

    /// Detect many snippets; results keep input order
    #[cfg(not(feature = "parallel"))]
    pub fn detect_batch<S>(&self, texts: &[S]) -> Vec<DetectionResult>
    where
        S: AsRef<str> + Sync,
    {
        texts.iter().map(|t| self.detect(t.as_ref())).collect()
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
