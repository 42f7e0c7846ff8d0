//! Optional TOML configuration for the `langsense` binary

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// Default limit on snippet length, in characters
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Settings read from `--config`; flags win over every value here
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Input limits
    #[serde(default)]
    pub input: InputConfig,

    /// Formatting defaults
    #[serde(default)]
    pub output: OutputConfig,

    /// Lexicon files
    #[serde(default)]
    pub lexicon: LexiconPaths,

    /// Threading
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Longest accepted snippet, in characters
    pub max_chars: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// `[output]` table
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is absent
    pub default_format: String,

    /// Indent JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Lexicon files used when no command-line flag names one
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct LexiconPaths {
    pub path: Option<PathBuf>,
    pub curation: Option<PathBuf>,
}

/// `[performance]` table
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        if config.input.max_chars == 0 {
            return Err(CliError::ConfigError("input.max_chars must be positive".to_string()).into());
        }
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
