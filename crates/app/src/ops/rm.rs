use clap::Args;

use common::command::Remove;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Rm {
    /// Name of the document to remove
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RmError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Rm {
    type Error = RmError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let position = session.resolve(&self.name)?;
        let command = Remove::new(&session.fs, position).map_err(SessionError::from)?;
        session.run(Box::new(command))?;
        session.commit()?;
        Ok(format!("removed '{}'", self.name))
    }
}
