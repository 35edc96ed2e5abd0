use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the commit records, newest first
    pub fn log(&self) -> anyhow::Result<()> {
        let records = self.commit_log().records()?;

        let mut writer = self.writer();
        if records.is_empty() {
            writeln!(writer, "No commits yet.")?;
            return Ok(());
        }

        for (position, record) in records.iter().enumerate() {
            if position > 0 {
                writeln!(writer)?;
            }
            record.display(&mut **writer)?;
        }

        Ok(())
    }
}
