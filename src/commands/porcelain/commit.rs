use crate::areas::repository::Repository;
use crate::artifacts::log::commit_record::CommitRecord;
use crate::artifacts::objects::snapshot_id::SnapshotId;
use crate::error::{VcsError, VcsResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

impl Repository {
    /// Snapshot the tracked files
    ///
    /// # Returns
    ///
    /// The snapshot ID and whether a new snapshot was created. Committing
    /// content that was already committed is a no-op.
    pub fn commit(&self, message: Option<&str>) -> anyhow::Result<(SnapshotId, bool)> {
        let message = message
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .ok_or(VcsError::MissingMessage)?;

        let mut index = self.index();
        // Load the index file from the disk
        index.rehydrate()?;

        if index.is_empty() {
            return Err(VcsError::EmptyTrackedSet.into());
        }

        let files = index.entries().map(Path::to_path_buf).collect::<Vec<PathBuf>>();
        let contents = files
            .iter()
            .map(|file| self.workspace().read_file(file))
            .collect::<VcsResult<Vec<_>>>()?;
        let id = SnapshotId::compute(&contents);
        let author = self.config().username()?;

        if !self.snapshots().store(&id, &files, self.workspace())? {
            writeln!(self.writer(), "Nothing to commit.")?;
            return Ok((id, false));
        }

        self.commit_log()
            .prepend(&CommitRecord::new(id.clone(), author, message.to_string()))?;

        info!(%id, files = files.len(), "changes committed");
        writeln!(self.writer(), "Changes are committed {id}")?;

        Ok((id, true))
    }
}
