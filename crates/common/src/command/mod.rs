//! Reversible operations and linear undo/redo history.
//!
//! Every mutating operation on the file system is wrapped in a [`Command`]
//! that captures, at construction time, exactly the pre-state needed to
//! invert itself. The [`CommandManager`] runs commands against a
//! [`Pfs`](crate::fs::Pfs) and keeps two stacks: the executed log and the
//! undone stack. A fresh command invalidates any pending redo history.

mod ops;

pub use ops::{
    Backup, Copy, CreateFile, CreateFolder, Edit, Move, Paste, Remove, Rename, UnzipFile,
    UnzipFolder, ZipFile, ZipFolder,
};

use crate::backup::BackupError;
use crate::fs::{FsError, Pfs};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Backup(#[from] BackupError),
    #[error("nothing to {0}")]
    EmptyHistory(&'static str),
    #[error("command cannot be reversed: {0}")]
    UnsupportedReversal(&'static str),
}

/// A reversible unit of work against the file system.
pub trait Command {
    fn execute(&mut self, fs: &mut Pfs) -> Result<(), CommandError>;
    fn unexecute(&mut self, fs: &mut Pfs) -> Result<(), CommandError>;

    /// Short human-readable description for history listings.
    fn describe(&self) -> String;
}

/// Linear undo/redo history over two command stacks.
#[derive(Default)]
pub struct CommandManager {
    log: Vec<Box<dyn Command>>,
    undone: Vec<Box<dyn Command>>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a command. On success it joins the executed log and the redo
    /// stack is cleared; on failure nothing is recorded and the error
    /// propagates unchanged.
    pub fn execute(
        &mut self,
        mut command: Box<dyn Command>,
        fs: &mut Pfs,
    ) -> Result<(), CommandError> {
        command.execute(fs)?;
        tracing::debug!(command = %command.describe(), "executed");
        self.log.push(command);
        self.undone.clear();
        Ok(())
    }

    /// Reverse the most recent command. If the reversal itself fails the
    /// command stays on the log.
    pub fn undo(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let mut command = self
            .log
            .pop()
            .ok_or(CommandError::EmptyHistory("undo"))?;
        if let Err(err) = command.unexecute(fs) {
            self.log.push(command);
            return Err(err);
        }
        tracing::debug!(command = %command.describe(), "undone");
        self.undone.push(command);
        Ok(())
    }

    /// Replay the most recently undone command.
    pub fn redo(&mut self, fs: &mut Pfs) -> Result<(), CommandError> {
        let mut command = self
            .undone
            .pop()
            .ok_or(CommandError::EmptyHistory("redo"))?;
        if let Err(err) = command.execute(fs) {
            self.undone.push(command);
            return Err(err);
        }
        tracing::debug!(command = %command.describe(), "redone");
        self.log.push(command);
        Ok(())
    }

    pub fn executed_len(&self) -> usize {
        self.log.len()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    /// Descriptions of the executed log, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.log.iter().map(|command| command.describe()).collect()
    }
}
