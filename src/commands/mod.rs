//! Command implementations
//!
//! - `porcelain`: User-facing commands (config, add, reset, commit, log,
//!   checkout, delete, help)

pub mod porcelain;
