//! Snapshot value types
//!
//! - `snapshot_id`: content-derived identifier naming a stored snapshot

pub mod snapshot_id;

/// Length of a SHA-256 hash in hexadecimal format
pub const SNAPSHOT_ID_LENGTH: usize = 64;

/// Shortest prefix accepted as an abbreviated snapshot ID
pub const MIN_PREFIX_LENGTH: usize = 4;
