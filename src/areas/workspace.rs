use crate::areas::repository::VCS_DIR;
use crate::error::{StorageContext, VcsError, VcsResult};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Working directory the tracked files live in
///
/// All paths handed to and returned from the workspace are relative to its
/// root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Turn a user supplied path into a path relative to the workspace root
    ///
    /// Absolute paths must point inside the workspace. Relative paths may not
    /// climb above the root.
    pub fn resolve(&self, path: &Path) -> VcsResult<PathBuf> {
        let relative = if path.is_absolute() {
            let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

            absolute
                .strip_prefix(&self.path)
                .map(Path::to_path_buf)
                .map_err(|_| VcsError::OutsideWorkspace(path.display().to_string()))?
        } else {
            path.to_path_buf()
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => normalized.push(name),
                Component::CurDir => {}
                Component::ParentDir if normalized.pop() => {}
                _ => return Err(VcsError::OutsideWorkspace(path.display().to_string())),
            }
        }

        Ok(normalized)
    }

    pub fn exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).exists()
    }

    /// Expand a path into the files it designates
    ///
    /// A file yields itself, a directory yields every file below it in
    /// sorted order. Nothing inside the repository's own storage directory
    /// can be listed.
    pub fn list_files(&self, file_path: &Path) -> VcsResult<Vec<PathBuf>> {
        let root_file_path = self.path.join(file_path);

        if file_path.starts_with(VCS_DIR) {
            return Err(VcsError::OutsideWorkspace(file_path.display().to_string()));
        }

        if !root_file_path.exists() {
            return Err(VcsError::not_found(file_path));
        }

        if !root_file_path.is_dir() {
            return Ok(vec![file_path.to_path_buf()]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for entry in walker {
            let entry = entry.storage_context(|| {
                format!("Unable to list directory {}", root_file_path.display())
            })?;

            if entry.file_type().is_file()
                && let Ok(relative) = entry.path().strip_prefix(&self.path)
            {
                files.push(relative.to_path_buf());
            }
        }

        debug!(dir = %file_path.display(), count = files.len(), "expanded directory");
        Ok(files)
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.strip_prefix(&self.path)
            .map(|relative| relative.starts_with(VCS_DIR))
            .unwrap_or(false)
    }

    pub fn read_file(&self, file_path: &Path) -> VcsResult<String> {
        let full_path = self.path.join(file_path);

        if !full_path.is_file() {
            return Err(VcsError::not_found(file_path));
        }

        std::fs::read_to_string(&full_path)
            .storage_context(|| format!("Unable to read file {}", file_path.display()))
    }

    /// Copy a workspace file below `destination`, keeping its relative path
    pub fn copy_to(&self, file_path: &Path, destination: &Path) -> VcsResult<()> {
        let source = self.path.join(file_path);
        let target = destination.join(file_path);

        if !source.is_file() {
            return Err(VcsError::not_found(file_path));
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).storage_context(|| {
                format!("Unable to create snapshot directory {}", parent.display())
            })?;
        }

        std::fs::copy(&source, &target)
            .storage_context(|| format!("Unable to copy file {}", file_path.display()))?;

        Ok(())
    }

    /// Overwrite a workspace file with the content of `source`
    ///
    /// Missing parent directories are created and a directory standing where
    /// the file should be is removed first.
    pub fn restore(&self, source: &Path, file_path: &Path) -> VcsResult<()> {
        let target = self.path.join(file_path);

        if target.is_dir() {
            warn!(path = %file_path.display(), "removing directory in the way of a stored file");
            std::fs::remove_dir_all(&target).storage_context(|| {
                format!("Failed to remove existing directory {}", file_path.display())
            })?;
        }

        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).storage_context(|| {
                format!("Failed to create directory {}", parent.display())
            })?;
        }

        std::fs::copy(source, &target)
            .storage_context(|| format!("Failed to restore file {}", file_path.display()))?;

        Ok(())
    }
}
