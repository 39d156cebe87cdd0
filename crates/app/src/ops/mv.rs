use clap::Args;

use common::command::Move;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Mv {
    /// Name of the document to move
    pub source: String,

    /// Name of the destination folder
    pub dest: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MvError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Mv {
    type Error = MvError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let source = session.resolve(&self.source)?;
        let dest = session.resolve(&self.dest)?;
        let command = Move::new(&session.fs, source, dest).map_err(SessionError::from)?;
        session.run(Box::new(command))?;
        session.commit()?;
        Ok(format!("moved '{}' into '{}'", self.source, self.dest))
    }
}
