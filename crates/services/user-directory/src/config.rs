//! User directory configuration.

use std::env;
use std::path::PathBuf;

use common::{ServiceConfig, StorageConfig, DEFAULT_DATA_DIR, USERS_STORAGE_KEY};

/// User directory configuration.
#[derive(Debug, Clone, Default)]
pub struct UserDirectoryConfig {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
}

impl UserDirectoryConfig {
    /// Load configuration from environment variables.
    ///
    /// `.env` is loaded by the binary before argument parsing.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        Self {
            service: ServiceConfig {
                service_name: defaults.service_name,
                log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            },
            storage: StorageConfig {
                data_dir: env::var("USER_DIRECTORY_DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
                users_key: env::var("USER_DIRECTORY_USERS_KEY")
                    .ok()
                    .filter(|key| !key.trim().is_empty())
                    .unwrap_or_else(|| USERS_STORAGE_KEY.to_string()),
            },
        }
    }

    /// Override the data directory (from the command line).
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.storage.data_dir = dir;
        }
        self
    }
}
