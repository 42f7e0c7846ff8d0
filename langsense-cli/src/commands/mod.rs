//! Subcommands of the `langsense` binary

use anyhow::Result;
use clap::Subcommand;
use langsense_core::Language;

use crate::output::OutputFormat;

pub mod detect;
pub mod evaluate;
pub mod generate_config;
pub mod validate;

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the language of texts or files
    Detect(detect::DetectArgs),

    /// Run the built-in sample cases and report accuracy
    Evaluate(evaluate::EvaluateArgs),

    /// Validate a lexicon file or a curation file
    Validate(validate::ValidateArgs),

    /// Write a lexicon or curation template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Show supported labels or formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List detection labels
    Labels,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::Evaluate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn execute(&self) {
        match self {
            ListCommands::Labels => {
                println!("Detection labels:");
                for language in Language::ALL {
                    println!("  {:<10} {}", language.code(), language.name());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in OutputFormat::ALL {
                    println!("  {:<10} {}", format.as_str(), format.description());
                }
            }
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // a second command in the same process keeps the first logger
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
