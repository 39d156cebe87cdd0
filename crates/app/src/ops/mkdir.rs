use clap::Args;

use common::command::CreateFolder;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Mkdir {
    /// Name of the new folder
    pub name: String,

    /// Parent folder name (defaults to the root)
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum MkdirError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Mkdir {
    type Error = MkdirError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let parent = match &self.parent {
            Some(name) => session.resolve(name)?,
            None => session.resolve_root()?,
        };
        session.run(Box::new(CreateFolder::new(&self.name, parent)))?;
        session.commit()?;
        Ok(format!("created folder '{}'", self.name))
    }
}
