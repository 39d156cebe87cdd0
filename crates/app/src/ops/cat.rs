use clap::Args;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Cat {
    /// Name of the file to print
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Cat {
    type Error = CatError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = Session::open(ctx)?;
        let position = session.resolve(&self.name)?;
        let content = session.fs.content(position).map_err(SessionError::from)?;
        Ok(content.to_string())
    }
}
