use clap::Args;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Tree {}

#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Tree {
    type Error = TreeError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = Session::open(ctx)?;
        Ok(session.fs.render().trim_end().to_string())
    }
}
