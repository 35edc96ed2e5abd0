//! Snapshot storage
//!
//! Every commit is a full copy of the tracked files, stored under
//! `vcs/commits/<snapshot-id>/` with the tracked relative paths preserved.
//! A snapshot directory is only ever created by renaming a fully populated
//! temporary directory, so its existence means the tracked content it is
//! named after has been committed.

use crate::areas::repository::VCS_DIR;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::snapshot_id::SnapshotId;
use crate::error::{StorageContext, VcsError, VcsResult};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct SnapshotStore {
    path: Box<Path>,
}

impl SnapshotStore {
    pub fn new(path: Box<Path>) -> Self {
        SnapshotStore { path }
    }

    pub fn snapshot_path(&self, id: &SnapshotId) -> PathBuf {
        self.path.join(id.as_ref())
    }

    pub fn contains(&self, id: &SnapshotId) -> bool {
        self.snapshot_path(id).is_dir()
    }

    /// Copy `files` from the workspace into the snapshot named `id`
    ///
    /// # Returns
    ///
    /// `false` without touching the disk if the snapshot already exists
    pub fn store(
        &self,
        id: &SnapshotId,
        files: &[PathBuf],
        workspace: &Workspace,
    ) -> VcsResult<bool> {
        let snapshot_path = self.snapshot_path(id);
        if snapshot_path.is_dir() {
            debug!(%id, "snapshot already stored");
            return Ok(false);
        }

        let temp_path = self.path.join(format!("tmp-{id}"));
        if temp_path.exists() {
            warn!(path = %temp_path.display(), "removing leftover temporary snapshot");
            std::fs::remove_dir_all(&temp_path).storage_context(|| {
                format!("Unable to remove temporary snapshot {}", temp_path.display())
            })?;
        }

        std::fs::create_dir_all(&temp_path).storage_context(|| {
            format!("Unable to create snapshot directory {}", temp_path.display())
        })?;

        for file in files {
            workspace.copy_to(file, &temp_path)?;
        }

        // rename the populated directory into place to make it atomic
        std::fs::rename(&temp_path, &snapshot_path).storage_context(|| {
            format!("Unable to rename snapshot to {}", snapshot_path.display())
        })?;

        debug!(%id, files = files.len(), "snapshot stored");
        Ok(true)
    }

    /// Resolve a full or abbreviated snapshot ID to a stored snapshot
    pub fn resolve(&self, reference: &str) -> VcsResult<SnapshotId> {
        if let Some(id) = SnapshotId::try_parse(reference) {
            return if self.contains(&id) {
                Ok(id)
            } else {
                Err(VcsError::UnknownCommit(reference.to_string()))
            };
        }

        if !SnapshotId::is_valid_prefix(reference) {
            return Err(VcsError::UnknownCommit(reference.to_string()));
        }

        let mut matches = self.find_by_prefix(reference)?;
        match matches.len() {
            0 => Err(VcsError::UnknownCommit(reference.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(VcsError::AmbiguousCommit {
                prefix: reference.to_string(),
                candidates: matches.iter().map(|id| id.to_string()).collect(),
            }),
        }
    }

    /// Find every stored snapshot whose ID starts with `prefix`
    pub fn find_by_prefix(&self, prefix: &str) -> VcsResult<Vec<SnapshotId>> {
        if !self.path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        let entries = std::fs::read_dir(&self.path).storage_context(|| {
            format!("Unable to list snapshots in {}", self.path.display())
        })?;

        for entry in entries {
            let entry = entry.storage_context(|| "Unable to read snapshot entry")?;
            let file_name = entry.file_name();

            if let Some(id) = SnapshotId::try_parse(&file_name.to_string_lossy())
                && id.as_ref().starts_with(prefix)
                && entry.path().is_dir()
            {
                matches.push(id);
            }
        }

        matches.sort();
        Ok(matches)
    }

    /// Every file stored in a snapshot, relative to the snapshot root
    ///
    /// A stored `vcs/` directory is never listed, so restoring a snapshot
    /// cannot overwrite repository state.
    pub fn files(&self, id: &SnapshotId) -> VcsResult<Vec<PathBuf>> {
        let snapshot_path = self.snapshot_path(id);
        if !snapshot_path.is_dir() {
            return Err(VcsError::UnknownCommit(id.to_string()));
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&snapshot_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(&snapshot_path)
                    .map(|relative| !relative.starts_with(VCS_DIR))
                    .unwrap_or(true)
            });

        for entry in walker {
            let entry = entry.storage_context(|| {
                format!("Unable to list snapshot {}", snapshot_path.display())
            })?;

            if entry.file_type().is_file()
                && let Ok(relative) = entry.path().strip_prefix(&snapshot_path)
            {
                files.push(relative.to_path_buf());
            }
        }

        Ok(files)
    }
}
