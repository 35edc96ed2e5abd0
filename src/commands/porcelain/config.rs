use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Print the username, replacing it first when `name` is given
    pub fn configure(&self, name: Option<&str>) -> anyhow::Result<String> {
        if let Some(name) = name {
            self.config().set_username(name)?;
        }

        let username = self.config().username()?;
        writeln!(self.writer(), "The username is {username}.")?;

        Ok(username)
    }
}
