//! The submission log: a UTF-8 CSV file, header row then one row per
//! accepted submission. Append-only; never rewritten or compacted.

use crate::error::Result;
use crate::models::{Submission, LOG_COLUMNS};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one row for an accepted submission, writing the fixed
    /// header first if the file does not exist yet.
    ///
    /// The header (if any) and the row are serialized into one buffer and
    /// written with a single `write_all` on a file opened in append mode,
    /// so concurrent submissions cannot interleave partial rows. There is
    /// no application-level locking beyond that.
    pub fn append(&self, submission: &Submission) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let needs_header = !self.path.exists();

        let mut buffer = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buffer);
            if needs_header {
                writer.write_record(LOG_COLUMNS)?;
            }
            writer.write_record(submission.to_row())?;
            writer.flush()?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&buffer)?;

        Ok(())
    }

    /// Number of data rows (the header is not counted). Zero if the log
    /// has not been created yet.
    pub fn row_count(&self) -> Result<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;
        Ok(reader.records().filter(|record| record.is_ok()).count())
    }
}
