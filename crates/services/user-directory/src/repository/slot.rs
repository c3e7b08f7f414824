//! Durable key-value slot port.

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read/write access to named slots of durable storage.
///
/// Each slot holds one complete serialized value; there is no partial or
/// incremental update. Writes must be durable before `write` returns.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SlotStorage: Send + Sync {
    /// Read the slot. Returns None if it has never been written.
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the slot's entire content.
    fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
