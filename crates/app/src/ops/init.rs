use clap::Args;

use common::prelude::{Document, Pfs};

use crate::state::{AppConfig, AppState};

#[derive(Args, Debug, Clone)]
pub struct Init {
    /// Name of the root folder (default: Root)
    #[arg(long, default_value = "Root")]
    pub root_name: String,

    /// How many entries the stats listings show (default: 5)
    #[arg(long, default_value_t = 5)]
    pub listing_len: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("init failed: {0}")]
    StateFailed(#[from] crate::state::StateError),

    #[error("could not write the working snapshot: {0}")]
    WorkingCopy(#[from] common::backup::BackupError),
}

impl crate::op::Op for Init {
    type Error = InitError;
    type Output = String;

    fn execute(&self, ctx: &crate::op::OpContext) -> Result<Self::Output, Self::Error> {
        let config = AppConfig {
            root_name: self.root_name.clone(),
            listing_len: self.listing_len,
        };

        let state = AppState::init(ctx.pfs_dir.clone(), Some(config))?;

        let fs = Pfs::new(Document::folder(&state.config.root_name));
        let store = state.store()?;
        store.save_working(&fs.save_state())?;

        let output = format!(
            "Initialized pfs directory at: {}\n\
             - Store: {}\n\
             - Config: {}\n\
             - Root folder: {}",
            state.pfs_dir.display(),
            state.store_path.display(),
            state.config_path.display(),
            state.config.root_name
        );

        Ok(output)
    }
}
