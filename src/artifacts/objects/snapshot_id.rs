//! Snapshot identifier (SHA-256 hash)
//!
//! Snapshot IDs are 64-character lowercase hexadecimal strings. They name the
//! directory a snapshot is stored under, so two commits whose tracked files
//! have the same text share one identifier.
//!
//! ## Hashing
//!
//! Every tracked file contributes its lines joined by a single space followed
//! by one trailing space. The concatenation, in index order, is hashed.

use crate::artifacts::objects::{MIN_PREFIX_LENGTH, SNAPSHOT_ID_LENGTH};
use sha2::{Digest, Sha256};

/// Snapshot identifier (SHA-256 hash of the tracked contents)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SnapshotId(String);

impl SnapshotId {
    /// Parse and validate a full snapshot ID
    ///
    /// # Returns
    ///
    /// `None` unless `id` is exactly 64 lowercase hexadecimal characters
    pub fn try_parse(id: &str) -> Option<Self> {
        if id.len() == SNAPSHOT_ID_LENGTH && Self::is_hex(id) {
            Some(Self(id.to_string()))
        } else {
            None
        }
    }

    /// Whether `prefix` is usable as an abbreviated snapshot ID
    pub fn is_valid_prefix(prefix: &str) -> bool {
        (MIN_PREFIX_LENGTH..=SNAPSHOT_ID_LENGTH).contains(&prefix.len()) && Self::is_hex(prefix)
    }

    fn is_hex(value: &str) -> bool {
        value
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    /// Hash the text of the tracked files, in index order
    pub fn compute<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha256::new();

        for content in contents {
            for (i, line) in content.as_ref().lines().enumerate() {
                if i > 0 {
                    hasher.update(b" ");
                }
                hasher.update(line.as_bytes());
            }
            hasher.update(b" ");
        }

        Self(format!("{:x}", hasher.finalize()))
    }

    /// First 7 characters of the ID
    pub fn to_short_id(&self) -> &str {
        &self.0[..7]
    }
}

impl AsRef<str> for SnapshotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
