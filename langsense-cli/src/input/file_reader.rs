//! Reading snippet files

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads UTF-8 input files
pub struct FileReader;

impl FileReader {
    /// Whole file as one snippet
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read a file and split it into its non-blank lines, with 1-based line numbers
    pub fn read_lines(path: &Path) -> Result<Vec<(usize, String)>> {
        let content = Self::read_text(path)?;
        Ok(content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, line.trim().to_string()))
            .collect())
    }
}
