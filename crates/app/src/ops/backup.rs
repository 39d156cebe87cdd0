use clap::Args;

use common::prelude::Caretaker;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Backup {}

#[derive(Debug, thiserror::Error)]
pub enum BackupError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("backup failed: {0}")]
    Store(#[from] common::backup::BackupError),
}

impl crate::op::Op for Backup {
    type Error = BackupError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = Session::open(ctx)?;
        let mut caretaker = Caretaker::new(session.store.clone());
        let name = caretaker.save_state(&session.fs)?;
        Ok(format!("wrote backup '{name}'"))
    }
}
