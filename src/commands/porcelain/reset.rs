use crate::areas::repository::Repository;
use crate::error::VcsError;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Stop tracking `path` (every occurrence, and everything below it)
    pub fn reset(&self, path: &Path) -> anyhow::Result<usize> {
        let relative = self.workspace().resolve(path)?;

        let mut index = self.index();
        index.rehydrate()?;

        let removed = index.remove(&relative);
        if removed == 0 {
            return Err(VcsError::NotTracked(path.display().to_string()).into());
        }
        index.write_updates()?;

        writeln!(self.writer(), "The file '{}' is untracked.", path.display())?;

        Ok(removed)
    }

    /// Stop tracking every file
    pub fn reset_all(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;
        index.clear();
        index.write_updates()?;

        writeln!(self.writer(), "The index is cleared.")?;

        Ok(())
    }
}
