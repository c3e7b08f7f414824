//! Repository layer: the record store and its durable slot storage.

mod file_slot;
mod memory_slot;
mod seed;
mod slot;
mod user_store;

pub use file_slot::FileSlotStorage;
pub use memory_slot::MemorySlotStorage;
pub use seed::seed_users;
pub use slot::SlotStorage;
pub use user_store::UserStore;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use slot::MockSlotStorage;
