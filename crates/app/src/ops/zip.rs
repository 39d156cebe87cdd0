use clap::Args;

use common::command::{Command, ZipFile, ZipFolder};

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Zip {
    /// Name of the folder or file to zip
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ZipError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Zip {
    type Error = ZipError;
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
            Box::new(ZipFolder::new(position))
        } else {
            Box::new(ZipFile::new(position))
        };
        session.run(command)?;
        session.commit()?;
        Ok(format!("zipped '{}'", self.name))
    }
}
