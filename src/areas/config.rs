use crate::error::{StorageContext, VcsResult};
use std::path::Path;
use tracing::debug;

/// Username used when none was configured
pub const DEFAULT_USERNAME: &str = "Username";

/// Environment variable consulted before falling back to [`DEFAULT_USERNAME`]
pub const AUTHOR_NAME_ENV: &str = "SVCS_AUTHOR_NAME";

/// Single-value username store backed by `vcs/config.txt`
#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    pub fn username(&self) -> VcsResult<String> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path).storage_context(|| {
                format!("Unable to read config file {}", self.path.display())
            })?;

            if let Some(name) = content.lines().next()
                && !name.is_empty()
            {
                return Ok(name.to_string());
            }
        }

        // the author occupies a single log line
        Ok(std::env::var(AUTHOR_NAME_ENV)
            .ok()
            .and_then(|name| name.lines().next().map(str::to_string))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string()))
    }

    pub fn set_username(&self, name: &str) -> VcsResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).storage_context(|| {
                format!("Unable to create directory {}", parent.display())
            })?;
        }

        std::fs::write(&self.path, name).storage_context(|| {
            format!("Unable to write config file {}", self.path.display())
        })?;

        debug!(%name, "username updated");
        Ok(())
    }
}
