//! Study notes
//!
//! Every answered query is appended to a plain text file as:
//!
//! ```text
//!
//!
//! ### Topic: <query>
//! <answer>
//! --------------------------------------------------------------------------------
//! ```
//!
//! The file is only ever appended to. It is never read, rotated or truncated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::Result;

/// Default notes file, relative to the working directory.
pub const DEFAULT_NOTES_PATH: &str = "study_notes.txt";

const RULE_WIDTH: usize = 80;

/// Appends note blocks to a file.
#[derive(Debug, Clone)]
pub struct NoteWriter {
    path: PathBuf,
}

impl NoteWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one block for `query` and `answer`, creating the file if needed.
    ///
    /// The parent directory must exist.
    pub fn append(&self, query: &str, answer: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(render(query, answer).as_bytes())?;

        info!(path = %self.path.display(), "saved note");
        Ok(())
    }
}

impl Default for NoteWriter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTES_PATH)
    }
}

/// Render the note block for one interaction.
pub fn render(query: &str, answer: &str) -> String {
    format!("\n\n### Topic: {query}\n{answer}\n{}\n", "-".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_template() {
        let rule = "-".repeat(80);
        assert_eq!(
            render("Q", "A"),
            format!("\n\n### Topic: Q\nA\n{rule}\n")
        );
    }

    #[test]
    fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let writer = NoteWriter::new(&path);

        writer.append("Binary", "zeros and ones").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), render("Binary", "zeros and ones"));
    }

    #[test]
    fn test_append_keeps_prior_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "existing notes").unwrap();

        let writer = NoteWriter::new(&path);
        writer.append("one", "first").unwrap();
        writer.append("two", "second").unwrap();

        let expected = format!("existing notes{}{}", render("one", "first"), render("two", "second"));
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = NoteWriter::new(dir.path().join("missing").join("notes.txt"));

        assert!(matches!(writer.append("q", "a"), Err(crate::Error::Notes(_))));
    }
}
