//! Hinglish likelihood from Romanized Hindi words, idioms and script mixing

use super::{tokenize, Scorer};
use crate::lexicon::Lexicon;
use crate::Language;

const WORD_WEIGHT: f64 = 2.0;
const PATTERN_WEIGHT: f64 = 3.0;
const MIXED_SCRIPT_BONUS: f64 = 5.0;

/// Scores Hinglish from a Romanized Hindi lexicon and phrase patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScorer;

impl Scorer for PatternScorer {
    fn language(&self) -> Language {
        Language::Hinglish
    }

    fn score(&self, text: &str, lexicon: &Lexicon) -> f64 {
        score_hinglish_patterns(text, lexicon)
    }
}

/// What the pattern scorer found in one text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternEvidence {
    /// ASCII-letter tokens in the text
    pub token_count: usize,
    /// Tokens found in the Romanized Hindi set, repeats included
    pub word_hits: usize,
    /// Distinct lexicon patterns found, in lexicon order
    pub matched_patterns: Vec<String>,
    /// Latin letters and Devanagari both present
    pub mixed_script: bool,
    /// Size of the lexicon's pattern list
    pub pattern_count: usize,
}

impl PatternEvidence {
    /// Collect evidence from `text`
    pub fn collect(text: &str, lexicon: &Lexicon) -> Self {
        let lowered = text.to_lowercase();

        let (token_count, word_hits) =
            tokenize::words(&lowered).fold((0usize, 0usize), |(n, hits), token| {
                (n + 1, hits + usize::from(lexicon.is_romanized_hindi(token)))
            });

        let matched_patterns = lexicon
            .patterns()
            .iter()
            .filter(|p| lowered.contains(p.as_str()))
            .cloned()
            .collect();

        let mixed_script =
            tokenize::has_ascii_letter(text) && text.chars().any(|c| lexicon.is_hindi_script(c));

        Self {
            token_count,
            word_hits,
            matched_patterns,
            mixed_script,
            pattern_count: lexicon.patterns().len(),
        }
    }

    /// Points earned
    pub fn accumulated(&self) -> f64 {
        let words = self.word_hits as f64 * WORD_WEIGHT;
        let patterns = self.matched_patterns.len() as f64 * PATTERN_WEIGHT;
        let bonus = if self.mixed_script {
            MIXED_SCRIPT_BONUS
        } else {
            0.0
        };
        words + patterns + bonus
    }

    /// Highest score the text could have earned
    pub fn max_possible(&self) -> f64 {
        self.token_count as f64 * WORD_WEIGHT
            + self.pattern_count as f64 * PATTERN_WEIGHT
            + MIXED_SCRIPT_BONUS
    }

    /// Normalized score in `[0, 100]`; zero without tokens
    pub fn score(&self) -> f64 {
        if self.token_count == 0 {
            return 0.0;
        }
        ((self.accumulated() / self.max_possible()) * 100.0).min(100.0)
    }
}

/// Hinglish score in `[0, 100]`
pub fn score_hinglish_patterns(text: &str, lexicon: &Lexicon) -> f64 {
    let evidence = PatternEvidence::collect(text, lexicon);
    tracing::trace!(
        tokens = evidence.token_count,
        word_hits = evidence.word_hits,
        patterns = evidence.matched_patterns.len(),
        mixed_script = evidence.mixed_script,
        "pattern evidence"
    );
    evidence.score()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(text: &str) -> PatternEvidence {
        PatternEvidence::collect(text, &Lexicon::embedded())
    }

    #[test]
    fn test_mixed_script_bonus() {
        let found = evidence("Hello! कैसे हैं आप?");
        assert!(found.mixed_script);
        assert_eq!(found.token_count, 1);
        assert_eq!(found.word_hits, 0);
        assert!(found.matched_patterns.is_empty());
        assert_eq!(found.accumulated(), 5.0);

        let expected = 5.0 / (2.0 + 3.0 * found.pattern_count as f64 + 5.0) * 100.0;
        assert!((found.score() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_script_gets_no_bonus() {
        assert!(!evidence("Main office ja raha hoon").mixed_script);
        assert!(!evidence("मैं आज ऑफिस जा रहा हूँ").mixed_script);
    }

    #[test]
    fn test_words_and_pattern() {
        let found = evidence("Main office ja raha hoon");
        assert_eq!(found.token_count, 5);
        // main, ja, raha, hoon
        assert_eq!(found.word_hits, 4);
        assert_eq!(found.matched_patterns, vec!["ja raha".to_string()]);
        assert_eq!(found.accumulated(), 11.0);
        assert_eq!(found.max_possible(), 10.0 + 3.0 * 18.0 + 5.0);
    }

    #[test]
    fn test_repeated_words_count_each_time() {
        let found = evidence("hai hai hai");
        assert_eq!(found.word_hits, 3);
    }

    #[test]
    fn test_pattern_counts_once() {
        let found = evidence("ja raha, ja raha, ja raha");
        assert_eq!(found.matched_patterns.len(), 1);
        assert_eq!(found.word_hits, 6);
    }

    #[test]
    fn test_pattern_is_a_substring_match() {
        // "kar rahe" also matches inside "kar rahen"
        let found = evidence("wo kaam kar rahen");
        assert!(found.matched_patterns.contains(&"kar rahe".to_string()));
    }

    #[test]
    fn test_no_tokens_scores_zero_even_with_devanagari() {
        let found = evidence("कैसे हैं आप?");
        assert_eq!(found.token_count, 0);
        assert_eq!(found.score(), 0.0);
        assert_eq!(score_hinglish_patterns("", &Lexicon::embedded()), 0.0);
    }

    #[test]
    fn test_huge_counts_do_not_wrap() {
        let found = PatternEvidence {
            token_count: 3_000_000_000,
            word_hits: 3_000_000_000,
            matched_patterns: Vec::new(),
            mixed_script: true,
            pattern_count: 18,
        };
        assert_eq!(found.accumulated(), 6_000_000_005.0);
        assert_eq!(found.max_possible(), 6_000_000_059.0);
        let score = found.score();
        assert!(score > 99.99 && score < 100.0);
    }

    #[test]
    fn test_score_is_capped() {
        let lexicon = Lexicon::from_toml_str(
            "[english]\nstopwords = [\"the\"]\n\n[hinglish]\nromanized_words = [\"hai\"]\n",
        )
        .unwrap();
        let score = score_hinglish_patterns("hai हाँ", &lexicon);
        // 2 + 5 of 2 + 0 + 5
        assert_eq!(score, 100.0);
    }
}
