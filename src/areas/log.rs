//! Commit log
//!
//! An ordered log of commit records with head insertion: the most recent
//! commit is always the first record of `vcs/log.txt`. Updates are written to
//! a temporary file that is then renamed over the log.

use crate::artifacts::log::commit_record::CommitRecord;
use crate::error::{StorageContext, VcsResult};
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub struct CommitLog {
    path: Box<Path>,
}

impl CommitLog {
    pub fn new(path: Box<Path>) -> Self {
        CommitLog { path }
    }

    /// Records, newest first
    pub fn records(&self) -> VcsResult<Vec<CommitRecord>> {
        CommitRecord::parse_all(&self.read()?)
    }

    /// Insert `record` at the head of the log
    pub fn prepend(&self, record: &CommitRecord) -> VcsResult<()> {
        let existing = self.read()?;
        let existing = existing.trim_matches('\n');

        let mut content = record.serialize();
        if !existing.is_empty() {
            content.push('\n');
            content.push_str(existing);
            content.push('\n');
        }

        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)
            .storage_context(|| format!("Unable to create directory {}", parent.display()))?;

        let temp_path = self.path.with_extension("txt.tmp");
        std::fs::write(&temp_path, content).storage_context(|| {
            format!("Unable to write commit log {}", temp_path.display())
        })?;
        std::fs::rename(&temp_path, &self.path).storage_context(|| {
            format!("Unable to rename commit log to {}", self.path.display())
        })?;

        debug!(id = %record.id(), "commit record added to log");
        Ok(())
    }

    fn read(&self) -> VcsResult<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        std::fs::read_to_string(&self.path)
            .storage_context(|| format!("Unable to read commit log {}", self.path.display()))
    }
}
