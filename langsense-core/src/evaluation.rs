//! Accuracy check over labeled samples

use serde::{Deserialize, Serialize};

use crate::aggregate::round2;
use crate::detector::LanguageDetector;
use crate::Language;

/// A text with the label it should get
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationCase {
    pub text: String,
    pub expected: Language,
}

impl EvaluationCase {
    pub fn new(text: impl Into<String>, expected: Language) -> Self {
        Self {
            text: text.into(),
            expected,
        }
    }
}

/// How one case went
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub input: String,
    pub expected: Language,
    pub detected: Language,
    pub confidence: f64,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub results: Vec<CaseOutcome>,
    /// Percentage of correct cases, two decimals
    pub accuracy: f64,
    pub total: usize,
}

impl EvaluationReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.correct).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.results.iter().filter(|r| !r.correct)
    }
}

/// Built-in sample set covering each label
pub fn default_cases() -> Vec<EvaluationCase> {
    vec![
        EvaluationCase::new("I am going to office", Language::English),
        EvaluationCase::new("मैं आज ऑफिस जा रहा हूँ", Language::Hindi),
        EvaluationCase::new("Main office ja raha hoon", Language::Hinglish),
        EvaluationCase::new("Kal meeting hai at office", Language::Hinglish),
        EvaluationCase::new("Hello, how are you?", Language::English),
        EvaluationCase::new("आज बहुत अच्छा दिन है", Language::Hindi),
    ]
}

/// Run every case through `detector`
pub fn evaluate(detector: &LanguageDetector, cases: &[EvaluationCase]) -> EvaluationReport {
    let results: Vec<CaseOutcome> = cases
        .iter()
        .map(|case| {
            let result = detector.detect(&case.text);
            CaseOutcome {
                input: case.text.clone(),
                expected: case.expected,
                detected: result.language,
                confidence: result.confidence,
                correct: result.language == case.expected,
            }
        })
        .collect();

    let total = results.len();
    let passed = results.iter().filter(|r| r.correct).count();
    let accuracy = if total == 0 {
        0.0
    } else {
        round2(passed as f64 / total as f64 * 100.0)
    };

    tracing::info!(passed, total, accuracy, "evaluation finished");

    EvaluationReport {
        results,
        accuracy,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cases_cover_scored_labels() {
        let cases = default_cases();
        assert_eq!(cases.len(), 6);
        for language in Language::SCORED {
            assert!(cases.iter().any(|c| c.expected == language));
        }
    }

    #[test]
    fn test_default_evaluation() {
        let report = evaluate(&LanguageDetector::new(), &default_cases());
        assert_eq!(report.total, 6);
        assert_eq!(report.passed(), 5);
        assert_eq!(report.accuracy, 83.33);

        // English function words outweigh the Romanized ones here
        let missed: Vec<&str> = report.failures().map(|r| r.input.as_str()).collect();
        assert_eq!(missed, vec!["Kal meeting hai at office"]);
    }

    #[test]
    fn test_empty_case_list() {
        let report = evaluate(&LanguageDetector::new(), &[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy, 0.0);
    }

    #[test]
    fn test_blank_case_expects_unknown() {
        let cases = [EvaluationCase::new("   ", Language::Unknown)];
        let report = evaluate(&LanguageDetector::new(), &cases);
        assert_eq!(report.accuracy, 100.0);
        assert_eq!(report.results[0].confidence, 0.0);
    }
}
