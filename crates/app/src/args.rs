use std::path::PathBuf;

use clap::Parser;

use crate::Command;

#[derive(Parser, Debug)]
#[command(name = "pfs", version, about = "Personal file system explorer")]
pub struct Args {
    /// Custom state directory (defaults to ~/.pfs)
    #[arg(long, global = true)]
    pub pfs_dir: Option<PathBuf>,

    /// Log level for diagnostic output on stderr
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}
