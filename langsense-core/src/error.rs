//! Error types for lexicon construction
//!
//! Detection itself never fails; only building a lexicon (from TOML, from a
//! file, or by applying a curation set) can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, validating or curating a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon or curation file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The TOML document is malformed or does not match the schema
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// The script range is empty or reversed
    #[error("invalid script range U+{start:04X}..=U+{end:04X}")]
    InvalidRange {
        /// First codepoint of the range
        start: u32,
        /// Last codepoint of the range
        end: u32,
    },

    /// A required list has no entries
    #[error("lexicon list '{0}' must not be empty")]
    EmptyList(&'static str),

    /// An entry can never match what the tokenizer produces
    #[error("invalid entry {entry:?} in '{list}': {reason}")]
    InvalidEntry {
        /// Name of the list holding the entry
        list: &'static str,
        /// The offending entry
        entry: String,
        /// Why the entry was rejected
        reason: &'static str,
    },
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
