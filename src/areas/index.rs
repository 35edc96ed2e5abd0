//! Tracked file index
//!
//! The index is the ordered list of files included in the next commit.
//!
//! ## Index File Format
//!
//! `vcs/index.txt` holds one path per line, in the order the paths were
//! tracked. Duplicates are kept: tracking a path twice makes it contribute
//! twice to the snapshot identifier.

use crate::error::{StorageContext, VcsResult};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Ordered list of tracked paths
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `vcs/index.txt`)
    path: Box<Path>,
    /// Tracked paths, relative to the workspace root
    entries: Vec<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    /// Load the index from disk
    ///
    /// A missing index file is an empty index.
    pub fn rehydrate(&mut self) -> VcsResult<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .storage_context(|| format!("Unable to read index file {}", self.path.display()))?;

        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(PathBuf::from)
            .collect();

        debug!(entries = self.entries.len(), "loaded index");
        Ok(())
    }

    /// Tracked paths in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn add(&mut self, path: PathBuf) {
        self.entries.push(path);
        self.changed = true;
    }

    /// Remove every occurrence of `path`, and every entry below it when it
    /// names a directory
    ///
    /// # Returns
    ///
    /// Number of entries removed
    pub fn remove(&mut self, path: &Path) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| !entry.starts_with(path));

        let removed = before - self.entries.len();
        if removed > 0 {
            self.changed = true;
        }
        removed
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.changed = true;
        }
        self.entries.clear();
    }

    /// Persist the index if it was modified
    pub fn write_updates(&mut self) -> VcsResult<()> {
        if !self.changed {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).storage_context(|| {
                format!("Unable to create directory {}", parent.display())
            })?;
        }

        let content = self
            .entries
            .iter()
            .map(|entry| format!("{}\n", entry.display()))
            .collect::<String>();

        std::fs::write(&self.path, content)
            .storage_context(|| format!("Unable to write index file {}", self.path.display()))?;

        self.changed = false;
        Ok(())
    }
}
