//! Lexicon source management for CLI

use anyhow::{Context, Result};
use langsense_core::{CurationSet, DetectorBuilder, LanguageDetector};
use std::path::PathBuf;

use crate::config::CliConfig;

/// Source of the lexicon a command detects with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Lexicon compiled into the binary
    BuiltIn {
        /// Optional curation file merged on top
        curation: Option<PathBuf>,
    },
    /// External lexicon file
    External {
        /// Path to the lexicon file
        path: PathBuf,
        /// Optional curation file merged on top
        curation: Option<PathBuf>,
    },
}

impl LexiconSource {
    /// Resolve from command-line flags, falling back to the config file
    pub fn resolve(
        lexicon: Option<&PathBuf>,
        curation: Option<&PathBuf>,
        config: &CliConfig,
    ) -> Self {
        let curation = curation.or(config.lexicon.curation.as_ref()).cloned();
        match lexicon.or(config.lexicon.path.as_ref()) {
            Some(path) => LexiconSource::External {
                path: path.clone(),
                curation,
            },
            None => LexiconSource::BuiltIn { curation },
        }
    }

    fn curation(&self) -> Option<&PathBuf> {
        match self {
            LexiconSource::BuiltIn { curation } | LexiconSource::External { curation, .. } => {
                curation.as_ref()
            }
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        let base = match self {
            LexiconSource::BuiltIn { .. } => "Built-in".to_string(),
            LexiconSource::External { path, .. } => format!("External: {}", path.display()),
        };
        match self.curation() {
            Some(curation) => format!("{base} (curation: {})", curation.display()),
            None => base,
        }
    }

    /// Build a detector over this source
    pub fn build_detector(&self) -> Result<LanguageDetector> {
        let mut builder = DetectorBuilder::new();
        if let LexiconSource::External { path, .. } = self {
            builder = builder.lexicon_file(path);
        }
        if let Some(path) = self.curation() {
            let set = CurationSet::from_file(path)
                .with_context(|| format!("Failed to load curation file: {}", path.display()))?;
            builder = builder.curation(set);
        }

        let detector = builder
            .build()
            .with_context(|| format!("Failed to build lexicon from {}", self.display_name()))?;
        log::info!(
            "Using lexicon '{}' ({})",
            detector.lexicon().name(),
            self.display_name()
        );
        Ok(detector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = CliConfig::default();
        config.lexicon.path = Some(PathBuf::from("from-config.toml"));

        let flag = PathBuf::from("from-flag.toml");
        let source = LexiconSource::resolve(Some(&flag), None, &config);
        assert_eq!(
            source,
            LexiconSource::External {
                path: flag,
                curation: None
            }
        );

        let source = LexiconSource::resolve(None, None, &config);
        assert_eq!(source.display_name(), "External: from-config.toml");
    }

    #[test]
    fn test_builtin_display_name() {
        let source = LexiconSource::resolve(None, None, &CliConfig::default());
        assert_eq!(source.display_name(), "Built-in");

        let curated = LexiconSource::BuiltIn {
            curation: Some(PathBuf::from("words.toml")),
        };
        assert_eq!(curated.display_name(), "Built-in (curation: words.toml)");
    }

    #[test]
    fn test_missing_external_file_fails() {
        let source = LexiconSource::External {
            path: PathBuf::from("/nonexistent/lexicon.toml"),
            curation: None,
        };
        let err = source.build_detector().unwrap_err();
        assert!(err.to_string().contains("Failed to build lexicon"));
    }

    #[test]
    fn test_builtin_detector() {
        let detector = LexiconSource::BuiltIn { curation: None }
            .build_detector()
            .unwrap();
        assert_eq!(detector.lexicon().name(), "default");
    }
}
