use clap::Args;

use common::command::CreateFile;
use common::prelude::Extension;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Touch {
    /// Name of the new file, without extension
    pub name: String,

    /// File extension (default: txt)
    #[arg(long, default_value = "txt")]
    pub extension: Extension,

    /// Parent folder name (defaults to the root)
    #[arg(long)]
    pub parent: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TouchError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Touch {
    type Error = TouchError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let parent = match &self.parent {
            Some(name) => session.resolve(name)?,
            None => session.resolve_root()?,
        };
        session.run(Box::new(CreateFile::with_extension(
            &self.name,
            self.extension,
            parent,
        )))?;
        session.commit()?;
        Ok(format!("created file '{}{}'", self.name, self.extension))
    }
}
