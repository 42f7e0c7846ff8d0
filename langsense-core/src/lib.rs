//! Hindi, English and Hinglish detection for short text snippets
//!
//! Three independent scorers look at the same text:
//!
//! - **Script**: how much of the text is Devanagari
//! - **Dictionary**: English stopwords, everyday words and suffixes
//! - **Pattern**: Romanized Hindi words, common Hinglish phrases and mixing
//!   of Latin and Devanagari
//!
//! The highest score picks the label; the aggregator turns the three scores
//! into a confidence value and a percentage breakdown. Scorers read an
//! immutable [`Lexicon`], so a detector can be shared freely across threads.
//!
//! # Example
//!
//! ```rust
//! use langsense_core::{Language, LanguageDetector};
//!
//! let detector = LanguageDetector::new();
//!
//! let result = detector.detect("Main office ja raha hoon");
//! assert_eq!(result.language, Language::Hinglish);
//! assert!(result.confidence > 75.0);
//!
//! let blank = detector.detect("   ");
//! assert_eq!(blank.language, Language::Unknown);
//! ```

pub mod aggregate;
pub mod config;
pub mod detector;
pub mod error;
pub mod evaluation;
pub mod language;
pub mod lexicon;
pub mod record;
pub mod scoring;
pub mod stats;

pub use aggregate::{Breakdown, ConfidenceAggregator};
pub use config::DetectorBuilder;
pub use detector::{DetectionResult, LanguageDetector};
pub use error::{LexiconError, Result};
pub use evaluation::{default_cases, evaluate, CaseOutcome, EvaluationCase, EvaluationReport};
pub use language::{Language, ParseLanguageError};
pub use lexicon::{
    CuratedPattern, CuratedWord, CurationSet, Lexicon, LexiconConfig, LexiconHandle, WordType,
};
pub use record::{CallerInfo, DetectionRecord, DetectionSink, MemorySink};
pub use scoring::{
    score_english_tokens, score_hindi_unicode, score_hinglish_patterns, ScoreSet, Scorer,
};
pub use stats::{DailyStats, StatsAggregator, StatsSummary};

/// Detect with the embedded default lexicon
pub fn detect(text: &str) -> DetectionResult {
    LanguageDetector::new().detect(text)
}
