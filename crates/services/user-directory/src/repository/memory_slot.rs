//! Process-local slot storage.

use std::collections::HashMap;
use std::sync::Mutex;

use common::{AppError, AppResult};

use super::slot::SlotStorage;

/// Slots kept in memory only; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySlotStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with one slot already populated
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.into(), value.into());
        }
        storage
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| AppError::storage("memory slots lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| AppError::storage("memory slots lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
