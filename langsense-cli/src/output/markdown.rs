//! Markdown output formatter

use super::OutputFormatter;
use crate::input::Snippet;
use anyhow::Result;
use langsense_core::stats::ConfidenceBucket;
use langsense_core::{DetectionResult, EvaluationReport, StatsSummary};
use std::io::Write;

/// Markdown formatter - outputs detections as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    detection_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            detection_count: 0,
        }
    }
}

/// Keep table cells on one line and away from the column separator
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_detection(&mut self, snippet: &Snippet, result: &DetectionResult) -> Result<()> {
        if self.detection_count == 0 {
            writeln!(
                self.writer,
                "| Source | Text | Language | Confidence | Hindi | English | Hinglish |"
            )?;
            writeln!(self.writer, "|---|---|---|---:|---:|---:|---:|")?;
        }
        self.detection_count += 1;
        writeln!(
            self.writer,
            "| {} | {} | {} | {:.2}% | {:.2} | {:.2} | {:.2} |",
            cell(&snippet.source),
            cell(&snippet.text),
            result.language,
            result.confidence,
            result.scores.hindi,
            result.scores.english,
            result.scores.hinglish
        )?;
        Ok(())
    }

    fn format_summary(&mut self, summary: &StatsSummary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "## Statistics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Label | Count | Share |")?;
        writeln!(self.writer, "|---|---:|---:|")?;
        for (language, share) in &summary.language_distribution {
            writeln!(
                self.writer,
                "| {} | {} | {:.2}% |",
                language, share.count, share.percentage
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "| Confidence | Count |")?;
        writeln!(self.writer, "|---|---:|")?;
        for bucket in ConfidenceBucket::ALL {
            writeln!(
                self.writer,
                "| {} | {} |",
                bucket.label(),
                summary.confidence_distribution.get(bucket)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Average confidence: {:.2}%",
            summary.avg_confidence
        )?;
        Ok(())
    }

    fn format_evaluation(&mut self, report: &EvaluationReport) -> Result<()> {
        writeln!(
            self.writer,
            "| Input | Expected | Detected | Confidence | Correct |"
        )?;
        writeln!(self.writer, "|---|---|---|---:|:---:|")?;
        for outcome in &report.results {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.2}% | {} |",
                cell(&outcome.input),
                outcome.expected,
                outcome.detected,
                outcome.confidence,
                if outcome.correct { "yes" } else { "no" }
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**Accuracy: {:.2}%** ({}/{})",
            report.accuracy,
            report.passed(),
            report.total
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.detection_count > 0 {
            writeln!(self.writer)?;
            writeln!(self.writer, "---")?;
            writeln!(self.writer, "*Total detections: {}*", self.detection_count)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
