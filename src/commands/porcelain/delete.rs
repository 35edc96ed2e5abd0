use crate::areas::repository::Repository;
use crate::error::StorageContext;
use std::io::Write;
use tracing::info;

impl Repository {
    /// Remove the whole `vcs` directory: index, config, log and snapshots
    pub fn delete(&self) -> anyhow::Result<bool> {
        let vcs_path = self.vcs_path();

        if !vcs_path.exists() {
            writeln!(self.writer(), "Nothing to delete.")?;
            return Ok(false);
        }

        std::fs::remove_dir_all(&vcs_path)
            .storage_context(|| format!("Unable to remove {}", vcs_path.display()))?;

        info!(path = %vcs_path.display(), "repository state deleted");
        writeln!(self.writer(), "The VCS directory is deleted.")?;

        Ok(true)
    }
}
