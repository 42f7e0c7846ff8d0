//! Evaluate command implementation

use anyhow::{Context, Result};
use clap::Args;
use langsense_core::{default_cases, evaluate, EvaluationCase};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::lexicon_source::LexiconSource;
use crate::output::{create_formatter, OutputFormat, OutputWriter};

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// TOML file with [[cases]] entries (default: built-in samples)
    #[arg(long, value_name = "FILE")]
    pub cases: Option<PathBuf>,

    /// Fail when accuracy falls below this percentage
    #[arg(long, value_name = "PERCENT")]
    pub min_accuracy: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Lexicon file to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Curation file merged into the lexicon
    #[arg(long, value_name = "FILE")]
    pub curation: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LANGSENSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Deserialize)]
struct CaseFile {
    cases: Vec<EvaluationCase>,
}

/// Load labeled cases from a TOML file
fn load_cases(path: &Path) -> Result<Vec<EvaluationCase>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read cases file: {}", path.display()))?;
    let file: CaseFile = toml::from_str(&content)
        .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
    Ok(file.cases)
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load(self.config.as_deref())?;
        let source = LexiconSource::resolve(self.lexicon.as_ref(), self.curation.as_ref(), &config);
        let detector = source.build_detector()?;

        let cases = match &self.cases {
            Some(path) => load_cases(path)?,
            None => default_cases(),
        };
        if cases.is_empty() {
            return Err(CliError::EmptyInput.into());
        }

        let report = evaluate(&detector, &cases);

        let writer: OutputWriter = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(self.format, writer, config.output.pretty_json);
        formatter.format_evaluation(&report)?;
        formatter.finish()?;

        if let Some(min) = self.min_accuracy {
            if report.accuracy < min {
                anyhow::bail!(
                    "Accuracy {:.2}% is below the required {:.2}%",
                    report.accuracy,
                    min
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn args(output: &Path) -> EvaluateArgs {
        EvaluateArgs {
            cases: None,
            min_accuracy: None,
            format: OutputFormat::Json,
            output: Some(output.to_path_buf()),
            lexicon: None,
            curation: None,
            config: None,
            verbose: 0,
        }
    }

    #[test]
    fn test_default_cases_report() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.json");
        args(&out).execute().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["total"], 6);
        assert_eq!(json["accuracy"], 83.33);
        assert_eq!(json["results"][0]["input"], "I am going to office");
    }

    #[test]
    fn test_min_accuracy_threshold() {
        let dir = TempDir::new().unwrap();
        let mut evaluate = args(&dir.path().join("report.json"));

        evaluate.min_accuracy = Some(80.0);
        assert!(evaluate.execute().is_ok());

        evaluate.min_accuracy = Some(90.0);
        let err = evaluate.execute().unwrap_err();
        assert!(err.to_string().contains("below the required"));
    }

    #[test]
    fn test_custom_cases_file() {
        let mut cases = NamedTempFile::new().unwrap();
        write!(
            cases,
            r#"
[[cases]]
text = "Bhai, kya haal hai?"
expected = "Hinglish"

[[cases]]
text = "Thank you for your help"
expected = "English"
"#
        )
        .unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("report.json");
        let mut evaluate = args(&out);
        evaluate.cases = Some(cases.path().to_path_buf());
        evaluate.min_accuracy = Some(100.0);
        evaluate.execute().unwrap();
    }

    #[test]
    fn test_malformed_cases_file() {
        let mut cases = NamedTempFile::new().unwrap();
        write!(cases, "[[cases]]\ntext = \"hello\"\nexpected = \"Klingon\"\n").unwrap();

        let dir = TempDir::new().unwrap();
        let mut evaluate = args(&dir.path().join("report.json"));
        evaluate.cases = Some(cases.path().to_path_buf());
        assert!(evaluate.execute().is_err());
    }
}
