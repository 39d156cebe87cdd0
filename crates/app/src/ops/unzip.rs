use clap::Args;

use common::command::{Command, UnzipFile, UnzipFolder};

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Unzip {
    /// Name of the folder or file to unzip
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UnzipError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Unzip {
    type Error = UnzipError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let mut session = Session::open(ctx)?;
        let position = session.resolve(&self.name)?;
        let is_folder = session
            .fs
            .tree()
            .get(position)
            .map(|doc| doc.is_folder())
            .unwrap_or(false);
        let command: Box<dyn Command> = if is_folder {
            Box::new(UnzipFolder::new(position))
        } else {
            Box::new(UnzipFile::new(position))
        };
        session.run(command)?;
        session.commit()?;
        Ok(format!("unzipped '{}'", self.name))
    }
}
