//! Live lexicon with snapshot-and-swap updates

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use super::{CurationSet, Lexicon};
use crate::detector::{DetectionResult, LanguageDetector};
use crate::error::Result;

/// Holds the lexicon currently in service
///
/// Readers take an `Arc` snapshot and score without holding any lock. A
/// publish replaces the whole `Arc`; calls already running keep the snapshot
/// they started with.
#[derive(Debug)]
pub struct LexiconHandle {
    current: RwLock<Arc<Lexicon>>,
    generation: AtomicU64,
}

impl LexiconHandle {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            current: RwLock::new(lexicon),
            generation: AtomicU64::new(0),
        }
    }

    /// The lexicon in service right now
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.read().0
    }

    /// Snapshot together with the generation it belongs to
    fn read(&self) -> (Arc<Lexicon>, u64) {
        // the guarded value is a single Arc, so a poisoned lock still holds a whole lexicon
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        // generation only moves under the write lock
        (Arc::clone(&current), self.generation.load(Ordering::Acquire))
    }

    /// Replace the lexicon; returns the new generation number
    pub fn publish(&self, lexicon: impl Into<Arc<Lexicon>>) -> u64 {
        let lexicon = lexicon.into();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = lexicon;
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::info!(generation, name = current.name(), "published lexicon snapshot");
        generation
    }

    /// Merge a curation set into the current lexicon and publish the result
    ///
    /// The merged lexicon is built outside the lock. If another snapshot was
    /// published meanwhile, the set is applied again on top of it. The
    /// current lexicon stays in service if the set is invalid.
    pub fn curate(&self, set: &CurationSet) -> Result<u64> {
        loop {
            let (base, seen) = self.read();
            let next = Arc::new(set.apply(&base)?);

            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            if self.generation.load(Ordering::Acquire) != seen {
                tracing::debug!(seen, "lexicon replaced during curation, rebuilding");
                continue;
            }
            *current = next;
            let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            tracing::info!(
                generation,
                words = set.words.len(),
                patterns = set.patterns.len(),
                "published curated lexicon snapshot"
            );
            return Ok(generation);
        }
    }

    /// Number of snapshots published since construction
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// A detector bound to the current snapshot
    pub fn detector(&self) -> LanguageDetector {
        LanguageDetector::with_lexicon(self.snapshot())
    }

    /// Detect using whatever snapshot is current when the call starts
    pub fn detect(&self, text: &str) -> DetectionResult {
        self.detector().detect(text)
    }
}

impl Default for LexiconHandle {
    fn default() -> Self {
        Self::new(Lexicon::embedded())
    }
}
