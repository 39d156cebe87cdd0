use clap::Args;

use common::command::Edit as EditCommand;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Edit {
    /// Name of the file to edit
    pub name: String,

    /// Replacement content
    pub content: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Edit {
    type Error = EditError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let position = session.resolve(&self.name)?;
        let command =
            EditCommand::new(&session.fs, position, &self.content).map_err(SessionError::from)?;
        session.run(Box::new(command))?;
        session.commit()?;
        Ok(format!("edited '{}'", self.name))
    }
}
