//! Shared configuration structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default directory holding the durable slots
pub const DEFAULT_DATA_DIR: &str = ".user-directory";

/// Slot that holds the serialized user collection
pub const USERS_STORAGE_KEY: &str = "users";

/// Base service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "user-directory".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Durable key-value storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory that holds one file per slot
    pub data_dir: PathBuf,
    /// Slot holding the user collection
    pub users_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            users_key: USERS_STORAGE_KEY.to_string(),
        }
    }
}
