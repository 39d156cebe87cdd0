use clap::Args;

use common::prelude::Caretaker;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Restore {
    /// Backup file name, as printed by 'pfs backups'
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("restore failed: {0}")]
    Store(#[from] common::backup::BackupError),
}

impl crate::op::Op for Restore {
    type Error = RestoreError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let mut caretaker = Caretaker::new(session.store.clone());
        caretaker.restore_state(&mut session.fs, &self.name)?;
        session.commit()?;
        Ok(format!("restored backup '{}'", self.name))
    }
}
