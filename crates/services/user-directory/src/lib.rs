//! User Directory Library
//!
//! A small persisted directory of user records:
//!
//! - `repository` - Record store over a durable key-value slot
//! - `view` - Search, filter and sort projections plus counts
//! - `edit` - Single-record inline edit session
//! - `service` - `UserManager`, the orchestration facade
//! - `media` - Profile photo loading
//! - `notify` - Operator notifications
//! - `cli` / `commands` - The `user-directory` binary

pub mod cli;
pub mod commands;
pub mod config;
pub mod edit;
pub mod media;
pub mod notify;
pub mod repository;
pub mod service;
pub mod view;

pub use config::UserDirectoryConfig;
pub use edit::{EditDraft, EditField, EditSession};
pub use media::{load_image, resolve_photo, PhotoSource};
pub use notify::{Notice, NoticeLevel, Notifier, TracingNotifier};
pub use repository::{FileSlotStorage, MemorySlotStorage, SlotStorage, UserStore};
pub use service::UserManager;
pub use view::{SortConfig, SortDirection, SortField, UserQuery, UserStats};

#[cfg(any(test, feature = "test-utils"))]
pub use notify::MockNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockSlotStorage;
