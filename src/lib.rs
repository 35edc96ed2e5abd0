//! A minimal local version control system
//!
//! Tracked files are snapshotted into content-addressed directories under
//! `vcs/commits/` and restored on demand.
//!
//! - `areas`: Persisted stores and the repository tying them together
//! - `artifacts`: Snapshot identifiers, commit records and output helpers
//! - `commands`: User-facing commands
//! - `error`: Error kinds and their exit codes

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;
