//! Output formatting module

use anyhow::Result;
use langsense_core::{DetectionResult, EvaluationReport, StatsSummary};
use std::io::Write;
use std::str::FromStr;

use crate::error::CliError;
use crate::input::Snippet;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single detection
    fn format_detection(&mut self, snippet: &Snippet, result: &DetectionResult) -> Result<()>;

    /// Format statistics over everything detected so far
    fn format_summary(&mut self, summary: &StatsSummary) -> Result<()>;

    /// Format an evaluation report
    fn format_evaluation(&mut self, report: &EvaluationReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One block of plain text per snippet
    Text,
    /// JSON array of detection results
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Plain text, one block per snippet",
            OutputFormat::Json => "JSON with the detection fields per snippet",
            OutputFormat::Markdown => "Markdown table",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format: {other}"
            ))),
        }
    }
}

/// Writer target shared by every formatter
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Create the formatter for `format`
pub fn create_formatter(
    format: OutputFormat,
    writer: OutputWriter,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
