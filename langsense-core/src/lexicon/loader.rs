//! Lexicon loader
//!
//! Manages the embedded default lexicon and loading from TOML sources.

use std::fs;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::{LexiconError, Result};
use crate::lexicon::{Lexicon, LexiconConfig};

/// TOML source of the built-in lexicon
pub(crate) const DEFAULT_LEXICON_TOML: &str = include_str!("../../configs/lexicon/default.toml");

static EMBEDDED: OnceLock<Arc<Lexicon>> = OnceLock::new();

/// The built-in lexicon, compiled on first access
pub(crate) fn embedded() -> Arc<Lexicon> {
    EMBEDDED
        .get_or_init(|| {
            let lexicon = from_toml_str(DEFAULT_LEXICON_TOML)
                .expect("Failed to load embedded default lexicon");
            tracing::debug!(
                stopwords = lexicon.stopword_count(),
                romanized = lexicon.romanized_word_count(),
                patterns = lexicon.patterns().len(),
                "compiled embedded lexicon"
            );
            Arc::new(lexicon)
        })
        .clone()
}

pub(crate) fn from_toml_str(toml_str: &str) -> Result<Lexicon> {
    let config: LexiconConfig = toml::from_str(toml_str)?;
    Lexicon::from_config(&config)
}

pub(crate) fn from_file(path: &Path) -> Result<Lexicon> {
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lexicon = from_toml_str(&content)?;
    tracing::info!(path = %path.display(), name = lexicon.name(), "loaded lexicon");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_source_parses() {
        let config: LexiconConfig = toml::from_str(DEFAULT_LEXICON_TOML).unwrap();
        assert_eq!(config.metadata.name, "default");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[metadata]
name = "tiny"

[english]
stopwords = ["the", "is"]

[hinglish]
romanized_words = ["hai"]
patterns = ["kya hai"]
"#
        )
        .unwrap();

        let lexicon = from_file(file.path()).unwrap();
        assert_eq!(lexicon.name(), "tiny");
        assert_eq!(lexicon.stopword_count(), 2);
        assert_eq!(lexicon.patterns(), ["kya hai"]);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = from_file(Path::new("/nonexistent/lexicon.toml")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/lexicon.toml"));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = from_toml_str("[english\nstopwords = ").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn test_missing_required_section_is_a_parse_error() {
        let err = from_toml_str("[english]\nstopwords = [\"the\"]\n").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }
}
