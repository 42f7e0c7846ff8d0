//! English likelihood from word lists and suffixes

use super::{tokenize, Scorer};
use crate::lexicon::Lexicon;
use crate::Language;

const STOPWORD_WEIGHT: f64 = 2.0;
const COMMON_WORD_WEIGHT: f64 = 1.5;
const SUFFIX_WEIGHT: f64 = 1.0;

/// Scores English from stopwords, everyday words and morphology
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenDictionaryScorer;

impl Scorer for TokenDictionaryScorer {
    fn language(&self) -> Language {
        Language::English
    }

    fn score(&self, text: &str, lexicon: &Lexicon) -> f64 {
        score_english_tokens(text, lexicon)
    }
}

/// Weight of one lowercased token; the first matching rule wins
pub fn token_weight(token: &str, lexicon: &Lexicon) -> f64 {
    if lexicon.is_stopword(token) {
        STOPWORD_WEIGHT
    } else if lexicon.is_common_word(token) {
        COMMON_WORD_WEIGHT
    } else if lexicon.has_english_suffix(token) {
        SUFFIX_WEIGHT
    } else {
        0.0
    }
}

/// English score in `[0, 100]`, relative to every token being a stopword
pub fn score_english_tokens(text: &str, lexicon: &Lexicon) -> f64 {
    let lowered = text.to_lowercase();

    let (count, weight) = tokenize::words(&lowered).fold((0usize, 0.0f64), |(n, sum), token| {
        (n + 1, sum + token_weight(token, lexicon))
    });

    if count == 0 {
        return 0.0;
    }

    let max_possible = count as f64 * STOPWORD_WEIGHT;
    ((weight / max_possible) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        score_english_tokens(text, &Lexicon::embedded())
    }

    #[test]
    fn test_no_tokens_scores_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("123 456 !!"), 0.0);
        assert_eq!(score("मैं आज ऑफिस जा रहा हूँ"), 0.0);
    }

    #[test]
    fn test_all_stopwords_is_full_score() {
        assert_eq!(score("I am in the"), 100.0);
        assert_eq!(score("THE Is"), 100.0);
    }

    #[test]
    fn test_weights_per_rule() {
        let lexicon = Lexicon::embedded();
        assert_eq!(token_weight("the", &lexicon), 2.0);
        assert_eq!(token_weight("hello", &lexicon), 1.5);
        assert_eq!(token_weight("programming", &lexicon), 1.0);
        assert_eq!(token_weight("nation", &lexicon), 1.0);
        assert_eq!(token_weight("python", &lexicon), 0.0);
        assert_eq!(token_weight("hai", &lexicon), 0.0);
    }

    #[test]
    fn test_mixed_weights() {
        // i(2) love(1.5) programming(1) in(2) python(0) = 6.5 of 10
        assert!((score("I love programming in Python") - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_english_sentence() {
        // i, am, going, to are stopwords; office is in no list
        assert!((score("I am going to office") - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_romanized_hindi_scores_low() {
        assert_eq!(score("Main office ja raha hoon"), 0.0);
    }
}
