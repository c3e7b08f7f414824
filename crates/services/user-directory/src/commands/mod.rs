//! Commands module - CLI command implementations.
//!
//! Each invocation rehydrates the store, runs one operation and exits.

pub mod users;

use std::sync::Arc;

use crate::config::UserDirectoryConfig;
use crate::notify::TracingNotifier;
use crate::repository::{seed_users, FileSlotStorage, UserStore};
use crate::service::UserManager;

/// Open the file-backed store and wrap it in a manager.
pub fn open_manager(config: &UserDirectoryConfig) -> UserManager {
    let storage = FileSlotStorage::new(config.storage.data_dir.clone());
    tracing::debug!("Using data directory {:?}", storage.dir());

    let store = UserStore::open_with(
        Arc::new(storage),
        config.storage.users_key.as_str(),
        seed_users(),
    );
    UserManager::new(store, Arc::new(TracingNotifier))
}
