use clap::Args;

use common::command::{Copy, Paste};

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Cp {
    /// Name of the document to copy
    pub source: String,

    /// Name of the destination folder
    pub dest: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CpError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Cp {
    type Error = CpError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let source = session.resolve(&self.source)?;
        let dest = session.resolve(&self.dest)?;
        // copy stages the clipboard, paste materializes the duplicate
        session.run(Box::new(Copy::new(&session.fs, source)))?;
        session.run(Box::new(Paste::new(dest)))?;
        session.commit()?;
        Ok(format!("copied '{}' into '{}'", self.source, self.dest))
    }
}
