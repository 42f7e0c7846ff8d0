//! Detection labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label assigned to a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Language {
    /// Devanagari-script Hindi
    Hindi,
    /// English
    English,
    /// Code-mixed Hindi written in Latin script
    Hinglish,
    /// Blank input
    Unknown,
}

impl Language {
    /// Labels a detector can choose between, in tie-break order
    pub const SCORED: [Language; 3] = [Language::Hindi, Language::English, Language::Hinglish];

    /// Every label, including `Unknown`
    pub const ALL: [Language; 4] = [
        Language::Hindi,
        Language::English,
        Language::Hinglish,
        Language::Unknown,
    ];

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Hinglish => "Hinglish",
            Language::Unknown => "Unknown",
        }
    }

    /// Get the short code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Hinglish => "hi-latn",
            Language::Unknown => "und",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returned when a string names no known label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language label: {0}")]
pub struct ParseLanguageError(pub String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hi" | "hin" | "hindi" => Ok(Language::Hindi),
            "en" | "eng" | "english" => Ok(Language::English),
            "hi-latn" | "hinglish" => Ok(Language::Hinglish),
            "und" | "unknown" => Ok(Language::Unknown),
            other => Err(ParseLanguageError(other.to_string())),
        }
    }
}
