use crate::areas::repository::Repository;
use crate::error::VcsError;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Repository {
    /// Track `path`, or every file below it when it is a directory
    pub fn add(&self, path: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let relative = self.workspace().resolve(path)?;

        if !self.workspace().exists(&relative) {
            return Err(VcsError::not_found(path).into());
        }

        let files = self.workspace().list_files(&relative)?;

        let mut index = self.index();
        // Load the index file from the disk
        index.rehydrate()?;

        for file in &files {
            index.add(file.clone());
        }
        index.write_updates()?;

        debug!(path = %path.display(), files = files.len(), "tracked");

        if files.is_empty() {
            writeln!(self.writer(), "Nothing to track in '{}'.", path.display())?;
        }
        for file in &files {
            writeln!(self.writer(), "The file '{}' is tracked.", file.display())?;
        }

        Ok(files)
    }

    /// Print the tracked files in insertion order
    pub fn list_tracked(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut index = self.index();
        index.rehydrate()?;

        let entries = index.entries().map(Path::to_path_buf).collect::<Vec<_>>();

        if entries.is_empty() {
            writeln!(self.writer(), "Add a file to the index.")?;
            return Ok(entries);
        }

        let mut writer = self.writer();
        writeln!(writer, "Tracked files:")?;
        for entry in &entries {
            writeln!(writer, "{}", entry.display())?;
        }

        Ok(entries)
    }
}
