pub mod backup;
pub mod backups;
pub mod cat;
pub mod cp;
pub mod edit;
pub mod init;
pub mod mkdir;
pub mod mv;
pub mod rename;
pub mod restore;
pub mod rm;
pub mod stats;
pub mod touch;
pub mod tree;
pub mod unzip;
pub mod zip;

pub use backup::Backup;
pub use backups::Backups;
pub use cat::Cat;
pub use cp::Cp;
pub use edit::Edit;
pub use init::Init;
pub use mkdir::Mkdir;
pub use mv::Mv;
pub use rename::Rename;
pub use restore::Restore;
pub use rm::Rm;
pub use stats::Stats;
pub use touch::Touch;
pub use tree::Tree;
pub use unzip::Unzip;
pub use zip::Zip;
