//! Terminal output helpers

use minus::Pager;
use std::io::{self, Write};

/// `Write` adapter that buffers command output into a minus pager
///
/// Output is only shown once [`PagedOutput::show`] is called, so it is used
/// for commands with potentially long output (`log`) when stdout is a
/// terminal.
pub struct PagedOutput {
    pager: Pager,
}

impl PagedOutput {
    pub fn new() -> Self {
        PagedOutput {
            pager: Pager::new(),
        }
    }

    /// Handle to the underlying pager, used to display it after writing
    pub fn pager(&self) -> Pager {
        self.pager.clone()
    }

    /// Display everything written so far
    pub fn show(pager: Pager) -> anyhow::Result<()> {
        minus::page_all(pager)?;
        Ok(())
    }
}

impl Default for PagedOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for PagedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
