use crate::areas::repository::Repository;
use crate::error::VcsError;
use std::io::Write;
use tracing::info;

impl Repository {
    /// Restore every file stored in the snapshot named by `target`
    ///
    /// `target` is a full snapshot ID or an unambiguous prefix of one. The
    /// files stored in the snapshot are written back regardless of what the
    /// index currently tracks, and the index itself is left untouched.
    ///
    /// # Returns
    ///
    /// Number of files restored
    pub fn checkout(&self, target: Option<&str>) -> anyhow::Result<usize> {
        let target = target
            .map(str::trim)
            .filter(|target| !target.is_empty())
            .ok_or(VcsError::MissingCommitId)?;

        let id = self.snapshots().resolve(target)?;
        let snapshot_path = self.snapshots().snapshot_path(&id);
        let files = self.snapshots().files(&id)?;

        for file in &files {
            self.workspace().restore(&snapshot_path.join(file), file)?;
        }

        info!(%id, restored = files.len(), "snapshot restored");
        writeln!(self.writer(), "Switched to commit {id}.")?;

        Ok(files.len())
    }
}
