// CLI modules
mod args;
mod op;
mod ops;
mod state;

use args::Args;
use clap::{Parser, Subcommand};
use op::Op;
use ops::{
    Backup, Backups, Cat, Cp, Edit, Init, Mkdir, Mv, Rename, Restore, Rm, Stats, Touch, Tree,
    Unzip, Zip,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

command_enum! {
    (Init, Init),
    (Tree, Tree),
    (Mkdir, Mkdir),
    (Touch, Touch),
    (Rename, Rename),
    (Mv, Mv),
    (Rm, Rm),
    (Edit, Edit),
    (Cat, Cat),
    (Cp, Cp),
    (Zip, Zip),
    (Unzip, Unzip),
    (Stats, Stats),
    (Backup, Backup),
    (Restore, Restore),
    (Backups, Backups),
}

fn main() {
    let args = Args::parse();

    // Diagnostics go to stderr so op output stays pipeable
    let log_level: tracing::Level = args.log_level.parse().unwrap_or(tracing::Level::WARN);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(stderr_layer).init();

    let ctx = op::OpContext {
        pfs_dir: args.pfs_dir,
    };

    match args.command.execute(&ctx) {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
