//! Commit log record
//!
//! ## Format
//!
//! ```text
//! commit <snapshot-id>
//! Author: <name>
//! <message>
//! ```
//!
//! Records are separated by a single blank line, newest first.
//!
//! Message lines starting with `commit `, after any number of spaces, are
//! written with one extra leading space so that no message line can be read
//! back as a record header. Parsing strips that space again.

use crate::artifacts::objects::snapshot_id::SnapshotId;
use crate::error::{VcsError, VcsResult};
use colored::Colorize;
use derive_new::new;
use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

const HEADER_REGEX: &str = r"^commit ([0-9a-f]{64})$";
const ESCAPED_LINE_REGEX: &str = r"^ *commit ";
const AUTHOR_PREFIX: &str = "Author: ";

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEADER_REGEX).expect("header pattern is valid"));
static ESCAPED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ESCAPED_LINE_REGEX).expect("escape pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitRecord {
    id: SnapshotId,
    author: String,
    message: String,
}

impl CommitRecord {
    pub fn id(&self) -> &SnapshotId {
        &self.id
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Serialize the record in log file format, terminated by a newline
    pub fn serialize(&self) -> String {
        let message = self
            .message
            .lines()
            .map(|line| {
                if ESCAPED_LINE.is_match(line) {
                    format!(" {line}")
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "commit {}\n{AUTHOR_PREFIX}{}\n{message}\n",
            self.id, self.author
        )
    }

    /// Print the record for `log`, highlighting the header line
    pub fn display(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", format!("commit {}", self.id).yellow())?;
        writeln!(writer, "{AUTHOR_PREFIX}{}", self.author)?;
        writeln!(writer, "{}", self.message)
    }

    /// Parse every record of a log file, keeping file order
    pub fn parse_all(content: &str) -> VcsResult<Vec<CommitRecord>> {
        let lines = content.lines().collect::<Vec<_>>();
        let is_header_at =
            |index: usize| lines.get(index).is_some_and(|line| HEADER.is_match(line));

        let mut records = Vec::new();
        let mut cursor = 0;

        while cursor < lines.len() {
            if lines[cursor].is_empty() {
                cursor += 1;
                continue;
            }

            let id = HEADER
                .captures(lines[cursor])
                .and_then(|caps| SnapshotId::try_parse(&caps[1]))
                .ok_or_else(|| {
                    corrupt(format!(
                        "expected a commit header, found '{}'",
                        lines[cursor]
                    ))
                })?;

            let author = lines
                .get(cursor + 1)
                .and_then(|line| line.strip_prefix(AUTHOR_PREFIX))
                .ok_or_else(|| corrupt(format!("commit {id} has no author line")))?;

            // the message runs until a blank line followed by the next header
            let message_start = (cursor + 2).min(lines.len());
            let mut message_end = message_start;
            while message_end < lines.len()
                && !(lines[message_end].is_empty() && is_header_at(message_end + 1))
            {
                message_end += 1;
            }

            let message = lines[message_start..message_end]
                .iter()
                .map(|line| unescape(line))
                .collect::<Vec<_>>()
                .join("\n")
                .trim_end()
                .to_string();

            records.push(CommitRecord::new(id, author.to_string(), message));
            cursor = message_end;
        }

        Ok(records)
    }
}

fn unescape(line: &str) -> &str {
    if ESCAPED_LINE.is_match(line) {
        line.strip_prefix(' ').unwrap_or(line)
    } else {
        line
    }
}

fn corrupt(reason: String) -> VcsError {
    VcsError::storage(
        "Unable to parse commit log",
        std::io::Error::new(std::io::ErrorKind::InvalidData, reason),
    )
}
