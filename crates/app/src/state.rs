use std::{fs, path::PathBuf};

use common::prelude::{BackupError, BackupStore};
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "pfs";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const STORE_DIR_NAME: &str = "store";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name of the root folder shown at the top of the hierarchy
    #[serde(default = "default_root_name")]
    pub root_name: String,
    /// How many entries the stats listings show
    #[serde(default = "default_listing_len")]
    pub listing_len: usize,
}

fn default_root_name() -> String {
    "Root".to_string()
}

fn default_listing_len() -> usize {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            listing_len: default_listing_len(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the pfs directory (~/.pfs)
    pub pfs_dir: PathBuf,
    /// Path to the snapshot store (working copy + backups)
    pub store_path: PathBuf,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Loaded configuration
    pub config: AppConfig,
}

impl AppState {
    /// Get the pfs directory path (custom or default ~/.pfs)
    pub fn pfs_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Check if the pfs directory exists
    #[allow(dead_code)]
    pub fn exists(custom_path: Option<PathBuf>) -> Result<bool, StateError> {
        let pfs_dir = Self::pfs_dir(custom_path)?;
        Ok(pfs_dir.exists())
    }

    /// Initialize a new pfs state directory
    pub fn init(
        custom_path: Option<PathBuf>,
        config: Option<AppConfig>,
    ) -> Result<Self, StateError> {
        let pfs_dir = Self::pfs_dir(custom_path)?;

        if pfs_dir.exists() {
            return Err(StateError::AlreadyInitialized);
        }

        fs::create_dir_all(&pfs_dir)?;

        let store_path = pfs_dir.join(STORE_DIR_NAME);
        fs::create_dir_all(&store_path)?;

        let config = config.unwrap_or_default();
        let config_path = pfs_dir.join(CONFIG_FILE_NAME);
        let config_toml = toml::to_string_pretty(&config)?;
        fs::write(&config_path, config_toml)?;

        Ok(Self {
            pfs_dir,
            store_path,
            config_path,
            config,
        })
    }

    /// Load existing state from the pfs directory
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let pfs_dir = Self::pfs_dir(custom_path)?;

        if !pfs_dir.exists() {
            return Err(StateError::NotInitialized);
        }

        let store_path = pfs_dir.join(STORE_DIR_NAME);
        let config_path = pfs_dir.join(CONFIG_FILE_NAME);

        if !store_path.exists() {
            return Err(StateError::MissingFile("store/".to_string()));
        }
        if !config_path.exists() {
            return Err(StateError::MissingFile("config.toml".to_string()));
        }

        let config_toml = fs::read_to_string(&config_path)?;
        let config: AppConfig = toml::from_str(&config_toml)?;

        Ok(Self {
            pfs_dir,
            store_path,
            config_path,
            config,
        })
    }

    /// Open the snapshot store backing this state directory
    pub fn store(&self) -> Result<BackupStore, StateError> {
        Ok(BackupStore::open(&self.store_path)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("pfs directory not initialized. Run 'pfs init' first")]
    NotInitialized,

    #[error("pfs directory already initialized")]
    AlreadyInitialized,

    #[error("no home directory found")]
    NoHomeDirectory,

    #[error("missing required file: {0}")]
    MissingFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot store error: {0}")]
    Store(#[from] BackupError),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("pfs");

        let state = AppState::init(Some(custom.clone()), None).unwrap();
        assert_eq!(state.config.root_name, "Root");
        assert!(state.store_path.is_dir());

        let loaded = AppState::load(Some(custom)).unwrap();
        assert_eq!(loaded.config.listing_len, 5);
    }

    #[test]
    fn double_init_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("pfs");
        AppState::init(Some(custom.clone()), None).unwrap();
        assert!(matches!(
            AppState::init(Some(custom), None),
            Err(StateError::AlreadyInitialized)
        ));
    }

    #[test]
    fn load_without_init_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppState::load(Some(dir.path().join("missing"))),
            Err(StateError::NotInitialized)
        ));
    }
}
