use clap::Args;

use common::command::Rename as RenameCommand;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Rename {
    /// Current document name
    pub name: String,

    /// New document name
    pub new_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Rename {
    type Error = RenameError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let position = session.resolve(&self.name)?;
        let command = RenameCommand::new(&session.fs, position, &self.new_name)
            .map_err(SessionError::from)?;
        session.run(Box::new(command))?;
        session.commit()?;
        Ok(format!("renamed '{}' to '{}'", self.name, self.new_name))
    }
}
