//! Detect command implementation

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use langsense_core::{DetectionRecord, DetectionSink, MemorySink};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{self, Snippet};
use crate::lexicon_source::LexiconSource;
use crate::output::{create_formatter, OutputFormat, OutputWriter};
use crate::progress::ProgressReporter;

/// Days of daily activity included with --stats
const RECENT_DAYS: u32 = 7;

/// Arguments for the detect command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).multiple(true).args(["text", "input"])))]
pub struct DetectArgs {
    /// Text to detect (repeatable)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Treat each non-blank line of an input file as a separate snippet
    #[arg(long)]
    pub lines: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lexicon file to use instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Curation file merged into the lexicon
    #[arg(long, value_name = "FILE")]
    pub curation: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "LANGSENSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Append a statistics summary of this run
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Snippets read from one place
struct SnippetGroup {
    name: String,
    from_file: bool,
    snippets: Vec<Snippet>,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting language detection");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => config.output.default_format.parse()?,
        };

        let source = LexiconSource::resolve(self.lexicon.as_ref(), self.curation.as_ref(), &config);
        let detector = source.build_detector()?;

        let groups = self.collect_groups()?;
        let total: usize = groups.iter().map(|g| g.snippets.len()).sum();
        if total == 0 {
            return Err(CliError::EmptyInput.into());
        }
        for group in &groups {
            input::check_lengths(&group.snippets, config.input.max_chars)?;
        }

        let threads = self.thread_count(&config);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build thread pool")?;
        log::info!("Detecting {total} snippet(s) on {threads} thread(s)");

        let file_count = groups.iter().filter(|g| g.from_file).count();
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(file_count as u64);

        let mut formatter = create_formatter(format, self.open_output()?, config.output.pretty_json);
        let sink = MemorySink::new();

        for group in &groups {
            let texts: Vec<&str> = group.snippets.iter().map(|s| s.text.as_str()).collect();
            let results = pool.install(|| detector.detect_batch(&texts));

            for (snippet, result) in group.snippets.iter().zip(results) {
                formatter.format_detection(snippet, &result)?;
                sink.store(DetectionRecord::new(&snippet.text, result))
                    .unwrap_or_else(|never| match never {});
            }

            if group.from_file {
                progress.file_completed(&group.name);
            }
        }
        progress.finish();

        if self.stats {
            formatter.format_summary(&sink.summary(RECENT_DAYS))?;
        }
        formatter.finish()?;

        log::info!("Detection complete: {} snippet(s)", sink.len());
        Ok(())
    }

    fn collect_groups(&self) -> Result<Vec<SnippetGroup>> {
        let mut groups = Vec::new();

        if !self.text.is_empty() {
            groups.push(SnippetGroup {
                name: "--text".to_string(),
                from_file: false,
                snippets: input::from_texts(&self.text),
            });
        }

        if !self.input.is_empty() {
            for path in input::resolve_patterns(&self.input)? {
                groups.push(SnippetGroup {
                    name: path.display().to_string(),
                    from_file: true,
                    snippets: input::from_file(&path, self.lines)?,
                });
            }
        }

        Ok(groups)
    }

    fn thread_count(&self, config: &CliConfig) -> usize {
        self.threads
            .filter(|&n| n > 0)
            .or(Some(config.performance.worker_threads).filter(|&n| n > 0))
            .unwrap_or_else(num_cpus::get)
    }

    fn open_output(&self) -> Result<OutputWriter> {
        match &self.output {
            Some(path) => Ok(Box::new(BufWriter::new(create_file(path)?))),
            None => Ok(Box::new(io::stdout())),
        }
    }
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(text: &[&str], output: &Path) -> DetectArgs {
        DetectArgs {
            text: text.iter().map(|t| t.to_string()).collect(),
            input: Vec::new(),
            lines: false,
            output: Some(output.to_path_buf()),
            format: Some(OutputFormat::Json),
            lexicon: None,
            curation: None,
            config: None,
            threads: Some(2),
            stats: false,
            quiet: true,
            verbose: 0,
        }
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_detect_texts_to_json() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");

        args(&["I am going to office", "Main office ja raha hoon"], &out)
            .execute()
            .unwrap();

        let json = read_json(&out);
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["language"], "English");
        assert_eq!(rows[1]["language"], "Hinglish");
        assert_eq!(rows[1]["source"], "text#2");
    }

    #[test]
    fn test_detect_file_lines_with_stats() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.txt");
        fs::write(&input, "मैं आज ऑफिस जा रहा हूँ\n\nI am going to office\n").unwrap();
        let out = dir.path().join("out.json");

        let mut detect = args(&[], &out);
        detect.input = vec![input.display().to_string()];
        detect.lines = true;
        detect.stats = true;
        detect.execute().unwrap();

        let json = read_json(&out);
        assert_eq!(json["detections"].as_array().unwrap().len(), 2);
        assert_eq!(json["statistics"]["total_detections"], 2);
        assert_eq!(
            json["statistics"]["language_distribution"]["Hindi"]["count"],
            1
        );
    }

    #[test]
    fn test_too_long_input_is_rejected() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out.json");
        let config = dir.path().join("config.toml");
        fs::write(&config, "[input]\nmax_chars = 5\n").unwrap();

        let mut detect = args(&["hello world"], &out);
        detect.config = Some(config);
        let err = detect.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputTooLong { chars: 11, max: 5, .. })
        ));
    }

    #[test]
    fn test_only_blank_lines_is_empty_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blank.txt");
        fs::write(&input, "\n   \n").unwrap();

        let mut detect = args(&[], &dir.path().join("out.json"));
        detect.input = vec![input.display().to_string()];
        detect.lines = true;
        let err = detect.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::EmptyInput)
        ));
    }

    #[test]
    fn test_thread_count_precedence() {
        let dir = TempDir::new().unwrap();
        let mut detect = args(&[], &dir.path().join("out"));
        let mut config = CliConfig::default();
        config.performance.worker_threads = 3;

        assert_eq!(detect.thread_count(&config), 2);
        detect.threads = None;
        assert_eq!(detect.thread_count(&config), 3);
        config.performance.worker_threads = 0;
        assert_eq!(detect.thread_count(&config), num_cpus::get());
    }
}
