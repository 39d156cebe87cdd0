use std::fmt::Write;

use clap::Args;

use crate::op::{Session, SessionError};

#[derive(Args, Debug, Clone)]
pub struct Stats {}

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl crate::op::Op for Stats {
    type Error = StatsError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let session = Session::open(ctx)?;
        let fs = &session.fs;
        let root = session.resolve_root()?;
        let listing_len = session.state.config.listing_len;

        let mut out = String::new();
        let _ = writeln!(out, "documents: {}", fs.size());
        let _ = writeln!(out, "height:    {}", fs.height());
        let _ = writeln!(
            out,
            "size:      {} bytes",
            fs.total_size(root).map_err(SessionError::from)?
        );

        let _ = writeln!(out, "recently created:");
        for position in fs.last_created(listing_len) {
            if let Ok(doc) = fs.tree().get(position) {
                let _ = writeln!(out, "  {}", doc);
            }
        }

        let _ = writeln!(out, "recently changed:");
        for position in fs.last_changed(listing_len) {
            if let Ok(doc) = fs.tree().get(position) {
                let _ = writeln!(out, "  {}", doc);
            }
        }

        Ok(out.trim_end().to_string())
    }
}
