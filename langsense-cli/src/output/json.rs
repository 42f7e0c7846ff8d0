//! JSON output formatter

use super::OutputFormatter;
use crate::input::Snippet;
use anyhow::Result;
use langsense_core::{DetectionResult, EvaluationReport, StatsSummary};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs detections as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    detections: Vec<DetectionData>,
    summary: Option<StatsSummary>,
    evaluation: Option<EvaluationReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionData {
    /// Where the snippet came from
    pub source: String,
    /// The snippet text
    pub input: String,
    /// Detection fields
    #[serde(flatten)]
    pub result: DetectionResult,
}

/// Detections together with their statistics
#[derive(Debug, Serialize)]
struct DetectionsWithStats<'a> {
    detections: &'a [DetectionData],
    statistics: &'a StatsSummary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            detections: Vec::new(),
            summary: None,
            evaluation: None,
        }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_detection(&mut self, snippet: &Snippet, result: &DetectionResult) -> Result<()> {
        self.detections.push(DetectionData {
            source: snippet.source.clone(),
            input: snippet.text.clone(),
            result: result.clone(),
        });
        Ok(())
    }

    fn format_summary(&mut self, summary: &StatsSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn format_evaluation(&mut self, report: &EvaluationReport) -> Result<()> {
        self.evaluation = Some(report.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let detections = std::mem::take(&mut self.detections);
        match (self.evaluation.take(), self.summary.take()) {
            (Some(report), _) => self.write_value(&report)?,
            (None, Some(summary)) => self.write_value(&DetectionsWithStats {
                detections: &detections,
                statistics: &summary,
            })?,
            (None, None) => self.write_value(&detections)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use langsense_core::{LanguageDetector, StatsAggregator};

    fn detect_into(formatter: &mut JsonFormatter<SharedBuffer>, text: &str) {
        let result = LanguageDetector::new().detect(text);
        formatter
            .format_detection(&Snippet::new("text#1", text), &result)
            .unwrap();
    }

    #[test]
    fn test_array_of_detections() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), false);
        detect_into(&mut formatter, "Main office ja raha hoon");
        formatter.finish().unwrap();

        let json: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["source"], "text#1");
        assert_eq!(first["language"], "Hinglish");
        assert!(first["breakdown"]["hinglish_percentage"].is_number());
    }

    #[test]
    fn test_detections_with_statistics() {
        let buffer = SharedBuffer::default();
        let mut formatter = JsonFormatter::new(buffer.clone(), true);
        detect_into(&mut formatter, "I am going to office");
        formatter
            .format_summary(&StatsAggregator::new().summary(Default::default(), 7))
            .unwrap();
        formatter.finish().unwrap();

        let json: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
        assert_eq!(json["detections"].as_array().unwrap().len(), 1);
        assert_eq!(json["statistics"]["total_detections"], 0);
    }
}
