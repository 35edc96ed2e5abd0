//! Commit log records
//!
//! - `commit_record`: one entry of `vcs/log.txt` (identifier, author, message)

pub mod commit_record;
