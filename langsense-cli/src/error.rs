//! Failures at the command-line boundary

use std::fmt;

/// Errors raised before any text reaches the detector
#[derive(Debug)]
pub enum CliError {
    /// An input path or pattern matched nothing
    FileNotFound(String),
    /// Glob syntax error
    InvalidPattern(String),
    /// Unreadable or invalid CLI config file
    ConfigError(String),
    /// Snippet longer than the configured limit
    InputTooLong {
        /// Where the snippet came from
        source: String,
        /// Length of the snippet in characters
        chars: usize,
        /// Configured limit
        max: usize,
    },
    /// Nothing to detect
    EmptyInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputTooLong { source, chars, max } => write!(
                f,
                "Input too long: {source} has {chars} characters (maximum {max})"
            ),
            CliError::EmptyInput => write!(f, "No text to detect"),
        }
    }
}

impl std::error::Error for CliError {}

/// Command result; boundary failures travel as [`CliError`] inside anyhow
pub type CliResult<T> = Result<T, anyhow::Error>;
