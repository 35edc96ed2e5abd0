//! Version control data structures
//!
//! - `core`: Shared utilities (pager wrapper)
//! - `log`: Commit records as stored in the commit log
//! - `objects`: Snapshot identifiers

pub mod core;
pub mod log;
pub mod objects;
