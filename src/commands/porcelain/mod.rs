//! User-facing commands
//!
//! Each command is an `impl Repository` block writing its outcome to the
//! repository writer.
//!
//! ## Commands
//!
//! - `config`: Get or set the username
//! - `add`: List or track files
//! - `reset`: Untrack one path or everything
//! - `commit`: Snapshot the tracked files
//! - `log`: Show commit records, newest first
//! - `checkout`: Restore a stored snapshot
//! - `delete`: Remove all persisted state
//! - `help`: Command summary

pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod delete;
pub mod help;
pub mod log;
pub mod reset;
