//! Persisted repository state
//!
//! - `config`: Username store (`vcs/config.txt`)
//! - `index`: Ordered list of tracked files (`vcs/index.txt`)
//! - `log`: Commit records, newest first (`vcs/log.txt`)
//! - `repository`: Root value tying the stores and the output writer together
//! - `snapshots`: Full-copy snapshots keyed by identifier (`vcs/commits/`)
//! - `workspace`: Working directory file system operations

pub(crate) mod config;
pub(crate) mod index;
pub(crate) mod log;
pub mod repository;
pub(crate) mod snapshots;
pub(crate) mod workspace;
