//! Error types reported by the version-control commands
//!
//! Every variant renders as the single line shown to the user and maps to
//! a distinct process exit code.

use std::path::Path;
use thiserror::Error;

/// Result type for repository operations.
pub type VcsResult<T> = Result<T, VcsError>;

#[derive(Debug, Error)]
pub enum VcsError {
    /// A referenced file does not exist on disk.
    #[error("Can't find '{0}'.")]
    NotFound(String),

    /// `reset <path>` was given a path that is not in the index.
    #[error("'{0}' is not tracked.")]
    NotTracked(String),

    /// The path resolves outside of the repository root.
    #[error("'{0}' is outside of the working directory.")]
    OutsideWorkspace(String),

    #[error("Message was not passed.")]
    MissingMessage,

    #[error("Commit id was not passed.")]
    MissingCommitId,

    #[error("Nothing to commit. Add a file to the index first.")]
    EmptyTrackedSet,

    #[error("Commit does not exist.")]
    UnknownCommit(String),

    #[error("Commit id '{prefix}' is ambiguous. Candidates: {}", candidates.join(", "))]
    AmbiguousCommit {
        prefix: String,
        candidates: Vec<String>,
    },

    #[error("Wrong input. Max one argument is allowed")]
    InvalidArgumentCount,

    #[error("'{0}' is not a SVCS command.")]
    UnknownCommand(String),

    /// Underlying file system failure.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl VcsError {
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound(path.as_ref().display().to_string())
    }

    pub fn storage(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error kind
    pub fn exit_code(&self) -> u8 {
        match self {
            VcsError::Storage { .. } => 1,
            VcsError::InvalidArgumentCount | VcsError::UnknownCommand(_) => 2,
            VcsError::MissingMessage | VcsError::MissingCommitId => 3,
            VcsError::EmptyTrackedSet => 4,
            VcsError::NotFound(_) | VcsError::NotTracked(_) | VcsError::OutsideWorkspace(_) => 5,
            VcsError::UnknownCommit(_) | VcsError::AmbiguousCommit { .. } => 6,
        }
    }
}

/// Attach a human readable context to I/O failures, turning them into
/// [`VcsError::Storage`].
pub trait StorageContext<T> {
    fn storage_context<C, F>(self, context: F) -> VcsResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> StorageContext<T> for std::io::Result<T> {
    fn storage_context<C, F>(self, context: F) -> VcsResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|source| VcsError::storage(context(), source))
    }
}

impl<T> StorageContext<T> for Result<T, walkdir::Error> {
    fn storage_context<C, F>(self, context: F) -> VcsResult<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|err| VcsError::storage(context(), err.into()))
    }
}
