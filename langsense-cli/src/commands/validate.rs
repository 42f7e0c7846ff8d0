//! Validate command implementation

use anyhow::Result;
use clap::{ArgGroup, Args};
use langsense_core::{CurationSet, Lexicon};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true).multiple(true).args(["lexicon", "curation"])))]
pub struct ValidateArgs {
    /// Path to a lexicon file to validate
    #[arg(short, long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Path to a curation file to validate
    #[arg(short, long, value_name = "FILE")]
    pub curation: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let base = match &self.lexicon {
            Some(path) => {
                println!("Validating lexicon: {}", path.display());
                match Lexicon::from_file(path) {
                    Ok(lexicon) => {
                        println!("✓ Lexicon is valid!");
                        println!("  Name: {}", lexicon.name());
                        println!("  Stopwords: {}", lexicon.stopword_count());
                        println!("  Common words: {}", lexicon.common_word_count());
                        println!("  Romanized words: {}", lexicon.romanized_word_count());
                        println!("  Patterns: {}", lexicon.patterns().len());
                        lexicon
                    }
                    Err(e) => {
                        println!("✗ Lexicon is invalid!");
                        println!("  Error: {e}");
                        return Err(anyhow::anyhow!("Validation failed: {}", e));
                    }
                }
            }
            None => Lexicon::embedded().as_ref().clone(),
        };

        if let Some(path) = &self.curation {
            println!("Validating curation set: {}", path.display());
            let checked = CurationSet::from_file(path)
                .and_then(|set| base.with_curation(&set).map(|curated| (set, curated)));
            match checked {
                Ok((set, curated)) => {
                    println!("✓ Curation set is valid!");
                    println!(
                        "  Words: {} ({} active)",
                        set.words.len(),
                        set.active_words().count()
                    );
                    println!("  Patterns: {}", set.patterns.len());
                    println!(
                        "  Romanized words after merge: {}",
                        curated.romanized_word_count()
                    );
                }
                Err(e) => {
                    println!("✗ Curation set is invalid!");
                    println!("  Error: {e}");
                    return Err(anyhow::anyhow!("Validation failed: {}", e));
                }
            }
        }

        Ok(())
    }
}
