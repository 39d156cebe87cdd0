//! Snapshot and restore of the document tree.
//!
//! A [`Memento`] is a deep structural copy of the tree taken at a point in
//! time. Snapshots are opaque to callers; the only things to do with one
//! are hand it back to [`Pfs::set_state`](crate::fs::Pfs::set_state) or
//! persist it through a [`BackupStore`]. The store serializes snapshots
//! with bincode: one fixed working-copy file that carries state across
//! sessions, plus one timestamped `.bak` file per manual backup. The
//! [`Caretaker`] ties the two together with an in-memory snapshot stack.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::fs::Pfs;
use crate::tree::Tree;

/// File name of the working copy inside the store directory.
pub const WORKING_FILE: &str = "explorer.pfs";

const BACKUP_PREFIX: &str = "pfsBackup_";
const BACKUP_SUFFIX: &str = ".bak";

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode error: {0}")]
    Encode(#[from] bincode::Error),
    #[error("no snapshot: {0}")]
    NoSnapshot(String),
}

/// An opaque deep-copy snapshot of the whole document tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memento {
    tree: Tree<Document>,
    taken_at: i64,
}

impl Memento {
    /// Deep-copy `tree` into a snapshot. Later mutations of the live tree
    /// cannot bleed into it.
    pub fn capture(tree: &Tree<Document>) -> Self {
        Memento {
            tree: tree.clone(),
            taken_at: Utc::now().timestamp(),
        }
    }

    pub fn into_tree(self) -> Tree<Document> {
        self.tree
    }

    /// Epoch seconds at which the snapshot was taken.
    pub fn taken_at(&self) -> i64 {
        self.taken_at
    }
}

/// Durable snapshot storage rooted at an explicit directory.
#[derive(Debug, Clone)]
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, BackupError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(BackupStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Backup file name for the given local time, minute resolution.
    pub fn backup_name(at: DateTime<Local>) -> String {
        format!(
            "{BACKUP_PREFIX}{}{BACKUP_SUFFIX}",
            at.format("%Y-%m-%d__%H-%M")
        )
    }

    /// Persist the working copy, overwriting any previous one.
    pub fn save_working(&self, memento: &Memento) -> Result<(), BackupError> {
        self.write_blob(WORKING_FILE, memento)
    }

    /// Load the working copy.
    pub fn load_working(&self) -> Result<Memento, BackupError> {
        self.read_blob(WORKING_FILE)
    }

    pub fn has_working(&self) -> bool {
        self.dir.join(WORKING_FILE).is_file()
    }

    /// Persist a manual backup under a timestamp-derived name and return
    /// that name. Two backups within the same minute share a name and the
    /// later one wins.
    pub fn save_backup(&self, memento: &Memento) -> Result<String, BackupError> {
        let name = Self::backup_name(Local::now());
        self.write_blob(&name, memento)?;
        tracing::info!(name = %name, "wrote backup");
        Ok(name)
    }

    /// Load a manual backup by file name.
    pub fn load_backup(&self, name: &str) -> Result<Memento, BackupError> {
        self.read_blob(name)
    }

    /// Backup file names present in the store, oldest first. The name
    /// format sorts chronologically.
    pub fn list(&self) -> Result<Vec<String>, BackupError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(BACKUP_PREFIX) && name.ends_with(BACKUP_SUFFIX) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn write_blob(&self, name: &str, memento: &Memento) -> Result<(), BackupError> {
        let blob = bincode::serialize(memento)?;
        fs::write(self.dir.join(name), blob)?;
        Ok(())
    }

    fn read_blob(&self, name: &str) -> Result<Memento, BackupError> {
        let path = self.dir.join(name);
        let blob = fs::read(&path)
            .map_err(|_| BackupError::NoSnapshot(format!("cannot read '{}'", path.display())))?;
        bincode::deserialize(&blob)
            .map_err(|_| BackupError::NoSnapshot(format!("'{name}' is corrupt")))
    }
}

/// Keeps an in-memory stack of snapshots on top of a [`BackupStore`].
#[derive(Debug)]
pub struct Caretaker {
    store: BackupStore,
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new(store: BackupStore) -> Self {
        Caretaker {
            store,
            history: Vec::new(),
        }
    }

    pub fn store(&self) -> &BackupStore {
        &self.store
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Snapshot the file system, persist it as a manual backup, and push
    /// it onto the in-memory stack. Returns the backup file name.
    pub fn save_state(&mut self, fs: &Pfs) -> Result<String, BackupError> {
        let memento = fs.save_state();
        let name = self.store.save_backup(&memento)?;
        self.history.push(memento);
        Ok(name)
    }

    /// Load a backup by name, push it onto the stack, and apply it.
    pub fn restore_state(&mut self, fs: &mut Pfs, name: &str) -> Result<(), BackupError> {
        let memento = self.store.load_backup(name)?;
        self.history.push(memento.clone());
        fs.set_state(memento);
        tracing::info!(name = %name, "restored backup");
        Ok(())
    }

    /// Re-apply the most recently stacked snapshot without touching disk.
    pub fn restore_last(&mut self, fs: &mut Pfs) -> Result<(), BackupError> {
        let memento = self
            .history
            .pop()
            .ok_or_else(|| BackupError::NoSnapshot("snapshot stack is empty".to_string()))?;
        fs.set_state(memento);
        Ok(())
    }
}
