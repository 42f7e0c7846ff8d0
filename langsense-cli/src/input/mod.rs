//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

use anyhow::Result;
use std::path::Path;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;

/// A piece of text to classify, tagged with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub source: String,
    pub text: String,
}

impl Snippet {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Snippets given directly on the command line
pub fn from_texts(texts: &[String]) -> Vec<Snippet> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Snippet::new(format!("text#{}", i + 1), text.clone()))
        .collect()
}

/// Snippets from one file: the whole file, or one per non-blank line
pub fn from_file(path: &Path, per_line: bool) -> Result<Vec<Snippet>> {
    let name = path.display().to_string();
    if per_line {
        Ok(FileReader::read_lines(path)?
            .into_iter()
            .map(|(line, text)| Snippet::new(format!("{name}:{line}"), text))
            .collect())
    } else {
        let text = FileReader::read_text(path)?;
        Ok(vec![Snippet::new(name, text.trim())])
    }
}

/// Reject snippets longer than `max_chars`
pub fn check_lengths(snippets: &[Snippet], max_chars: usize) -> Result<()> {
    if let Some(snippet) = snippets.iter().find(|s| s.char_count() > max_chars) {
        return Err(CliError::InputTooLong {
            source: snippet.source.clone(),
            chars: snippet.char_count(),
            max: max_chars,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_texts_are_numbered() {
        let snippets = from_texts(&["a".to_string(), "b".to_string()]);
        assert_eq!(snippets[0], Snippet::new("text#1", "a"));
        assert_eq!(snippets[1].source, "text#2");
    }

    #[test]
    fn test_file_as_one_or_many_snippets() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.txt");
        fs::write(&path, "I am going to office\n\nMain office ja raha hoon\n").unwrap();

        let whole = from_file(&path, false).unwrap();
        assert_eq!(whole.len(), 1);
        assert!(whole[0].text.ends_with("hoon"));

        let lines = from_file(&path, true).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].source.ends_with(":3"));
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let snippets = vec![Snippet::new("hindi", "है".repeat(5))];
        // 10 chars, 30 bytes
        assert!(check_lengths(&snippets, 10).is_ok());
        let err = check_lengths(&snippets, 9).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InputTooLong { chars: 10, max: 9, .. })
        ));
    }
}
