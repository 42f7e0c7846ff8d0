//! Detector configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::detector::LanguageDetector;
use crate::error::Result;
use crate::lexicon::{CurationSet, Lexicon, LexiconHandle};

/// Where the base lexicon comes from
#[derive(Debug, Clone, Default)]
enum LexiconSource {
    #[default]
    Embedded,
    File(PathBuf),
    Toml(String),
    Loaded(Arc<Lexicon>),
}

/// Builder for [`LanguageDetector`]
///
/// ```
/// use langsense_core::{CurationSet, LanguageDetector};
///
/// let detector = LanguageDetector::builder()
///     .curation(CurationSet::new())
///     .build()
///     .unwrap();
/// assert_eq!(detector.lexicon().name(), "default");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetectorBuilder {
    source: LexiconSource,
    curation: Option<CurationSet>,
}

impl DetectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the lexicon from a TOML file
    pub fn lexicon_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = LexiconSource::File(path.into());
        self
    }

    /// Parse the lexicon from TOML text
    pub fn lexicon_toml(mut self, toml: impl Into<String>) -> Self {
        self.source = LexiconSource::Toml(toml.into());
        self
    }

    /// Use an already compiled lexicon
    pub fn lexicon(mut self, lexicon: impl Into<Arc<Lexicon>>) -> Self {
        self.source = LexiconSource::Loaded(lexicon.into());
        self
    }

    /// Merge a curation set into the base lexicon
    pub fn curation(mut self, set: CurationSet) -> Self {
        self.curation = Some(set);
        self
    }

    /// Resolve the final lexicon
    pub fn build_lexicon(self) -> Result<Arc<Lexicon>> {
        let base = match self.source {
            LexiconSource::Embedded => Lexicon::embedded(),
            LexiconSource::File(path) => Arc::new(Lexicon::from_file(path)?),
            LexiconSource::Toml(toml) => Arc::new(Lexicon::from_toml_str(&toml)?),
            LexiconSource::Loaded(lexicon) => lexicon,
        };

        match self.curation {
            Some(set) => Ok(Arc::new(base.with_curation(&set)?)),
            None => Ok(base),
        }
    }

    /// Build a detector
    pub fn build(self) -> Result<LanguageDetector> {
        Ok(LanguageDetector::with_lexicon(self.build_lexicon()?))
    }

    /// Build a live handle seeded with the resolved lexicon
    pub fn build_handle(self) -> Result<LexiconHandle> {
        Ok(LexiconHandle::new(self.build_lexicon()?))
    }
}
