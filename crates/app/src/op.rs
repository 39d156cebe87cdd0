use std::error::Error;
use std::path::PathBuf;

use common::prelude::*;

use crate::state::{AppState, StateError};

/// Shared context handed to every operation.
#[derive(Clone, Default)]
pub struct OpContext {
    /// Optional custom state path (defaults to ~/.pfs)
    pub pfs_dir: Option<PathBuf>,
}

/// One CLI invocation's view of the file system: state directory,
/// snapshot store, the tree loaded from the working copy, and a fresh
/// command history.
pub struct Session {
    pub state: AppState,
    pub store: BackupStore,
    pub fs: Pfs,
    pub manager: CommandManager,
}

impl Session {
    /// Load the state directory and the working snapshot.
    pub fn open(ctx: &OpContext) -> Result<Self, SessionError> {
        let state = AppState::load(ctx.pfs_dir.clone())?;
        let store = state.store()?;
        let fs = Pfs::from_tree(store.load_working()?.into_tree());
        Ok(Session {
            state,
            store,
            fs,
            manager: CommandManager::new(),
        })
    }

    /// Run one command through the history.
    pub fn run(&mut self, command: Box<dyn Command>) -> Result<(), SessionError> {
        self.manager.execute(command, &mut self.fs)?;
        Ok(())
    }

    /// Resolve a document by name, depth-first from the root.
    pub fn resolve(&self, name: &str) -> Result<Position, SessionError> {
        self.fs
            .find(name)
            .ok_or_else(|| SessionError::NotFound(name.to_string()))
    }

    /// The root folder. Empty trees only happen if the working copy was
    /// tampered with.
    pub fn resolve_root(&self) -> Result<Position, SessionError> {
        self.fs
            .root()
            .ok_or_else(|| SessionError::NotFound("<root>".to_string()))
    }

    /// Persist the working snapshot for the next invocation.
    pub fn commit(&self) -> Result<(), SessionError> {
        self.store.save_working(&self.fs.save_state())?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("snapshot store error: {0}")]
    Store(#[from] BackupError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("no document named '{0}'")]
    NotFound(String),
}

pub trait Op {
    type Error: Error + Send + Sync + 'static;
    type Output;

    fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::op::Op>::Error),
            )*
        }

        impl $crate::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            fn execute(&self, ctx: &$crate::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx)
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
