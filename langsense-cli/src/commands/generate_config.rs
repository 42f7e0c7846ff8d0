//! Writes lexicon and curation templates

use anyhow::{Context, Result};
use clap::Args;
use langsense_core::{CuratedWord, CurationSet, Lexicon, LexiconConfig, WordType};
use std::fs;
use std::path::PathBuf;

/// Kind of template to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Full lexicon, starting from the built-in one
    Lexicon,
    /// Curation set with example entries
    Curation,
}

/// Arguments for `langsense generate-config`
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Where to write the template
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Template to generate
    #[arg(short, long, value_enum, default_value = "lexicon")]
    pub kind: TemplateKind,

    /// Name recorded in the lexicon metadata
    #[arg(short, long, value_name = "NAME", default_value = "custom")]
    pub name: String,
}

impl GenerateConfigArgs {
    pub fn execute(&self) -> Result<()> {
        println!("Generating {:?} template...", self.kind);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to add or remove words and phrases");
        println!("2. Validate it:");
        let flag = match self.kind {
            TemplateKind::Lexicon => "--lexicon",
            TemplateKind::Curation => "--curation",
        };
        println!("   langsense validate {flag} {}", self.output.display());
        println!("3. Use it for detection:");
        println!(
            "   langsense detect -t \"Main office ja raha hoon\" {flag} {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template content
    fn generate_template(&self) -> Result<String> {
        match self.kind {
            TemplateKind::Lexicon => {
                let mut config: LexiconConfig = Lexicon::embedded().to_config();
                config.metadata.name = self.name.clone();
                config.metadata.description = "Generated from the built-in lexicon".to_string();
                let body = toml::to_string_pretty(&config).context("Failed to render lexicon")?;
                Ok(format!(
                    "# Lexicon for Hindi, English and Hinglish detection\n\
                     # Word entries may only contain ASCII letters.\n\n{body}"
                ))
            }
            TemplateKind::Curation => {
                let mut set = CurationSet::new();
                let mut yaar = CuratedWord::new("yaar", WordType::Expression);
                yaar.frequency = 10;
                set.upsert_word(yaar);
                set.upsert_word(CuratedWord::new("jaldi", WordType::Adjective));
                set.add_pattern("chal yaar");
                let body = toml::to_string_pretty(&set).context("Failed to render curation set")?;
                Ok(format!(
                    "# Curated Romanized Hindi words and phrases\n\
                     # Set is_active = false to remove an entry from the lexicon.\n\n{body}"
                ))
            }
        }
    }
}
