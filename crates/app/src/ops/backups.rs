use clap::Args;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Backups {}

#[derive(Debug, thiserror::Error)]
pub enum BackupsError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("could not list backups: {0}")]
    Store(#[from] common::backup::BackupError),
}

impl crate::op::Op for Backups {
    type Error = BackupsError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = Session::open(ctx)?;
        let names = session.store.list()?;
        if names.is_empty() {
            return Ok("no backups yet".to_string());
        }
        Ok(names.join("\n"))
    }
}
