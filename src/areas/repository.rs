use crate::areas::config::Config;
use crate::areas::index::Index;
use crate::areas::log::CommitLog;
use crate::areas::snapshots::SnapshotStore;
use crate::areas::workspace::Workspace;
use crate::error::{StorageContext, VcsResult};
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Directory holding all persisted state, relative to the repository root
pub const VCS_DIR: &str = "vcs";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    snapshots: SnapshotStore,
    log: CommitLog,
    config: Config,
    workspace: Workspace,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Nothing is created on disk until a command writes state.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> VcsResult<Self> {
        let path = path
            .canonicalize()
            .storage_context(|| format!("Unable to open working directory {}", path.display()))?;
        let vcs_path = path.join(VCS_DIR);

        Ok(Repository {
            writer: RefCell::new(writer),
            index: RefCell::new(Index::new(vcs_path.join("index.txt").into_boxed_path())),
            snapshots: SnapshotStore::new(vcs_path.join("commits").into_boxed_path()),
            log: CommitLog::new(vcs_path.join("log.txt").into_boxed_path()),
            config: Config::new(vcs_path.join("config.txt").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn vcs_path(&self) -> Box<Path> {
        self.path.join(VCS_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn commit_log(&self) -> &CommitLog {
        &self.log
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
