//! Plain text output formatter

use super::OutputFormatter;
use crate::input::Snippet;
use anyhow::Result;
use langsense_core::stats::ConfidenceBucket;
use langsense_core::{DetectionResult, EvaluationReport, StatsSummary};
use std::io::Write;

/// Plain text formatter - outputs one block per snippet
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_detection(&mut self, snippet: &Snippet, result: &DetectionResult) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {} ({:.2}% confidence)",
            snippet.source, result.language, result.confidence
        )?;
        writeln!(
            self.writer,
            "  scores:    hindi {:.2} | english {:.2} | hinglish {:.2}",
            result.scores.hindi, result.scores.english, result.scores.hinglish
        )?;
        writeln!(
            self.writer,
            "  breakdown: hindi {:.2}% | english {:.2}% | hinglish {:.2}%",
            result.breakdown.hindi, result.breakdown.english, result.breakdown.hinglish
        )?;
        Ok(())
    }

    fn format_summary(&mut self, summary: &StatsSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Statistics")?;
        writeln!(self.writer, "  Total detections: {}", summary.total_detections)?;
        writeln!(self.writer, "  Average confidence: {:.2}%", summary.avg_confidence)?;
        for (language, share) in &summary.language_distribution {
            writeln!(
                self.writer,
                "  {}: {} ({:.2}%)",
                language, share.count, share.percentage
            )?;
        }
        for bucket in ConfidenceBucket::ALL {
            writeln!(
                self.writer,
                "  Confidence {}: {}",
                bucket.label(),
                summary.confidence_distribution.get(bucket)
            )?;
        }
        Ok(())
    }

    fn format_evaluation(&mut self, report: &EvaluationReport) -> Result<()> {
        for outcome in &report.results {
            let mark = if outcome.correct { "PASS" } else { "FAIL" };
            writeln!(
                self.writer,
                "[{mark}] {} -> {} (expected {}, {:.2}% confidence)",
                outcome.input, outcome.detected, outcome.expected, outcome.confidence
            )?;
        }
        writeln!(
            self.writer,
            "Accuracy: {:.2}% ({}/{})",
            report.accuracy,
            report.passed(),
            report.total
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
