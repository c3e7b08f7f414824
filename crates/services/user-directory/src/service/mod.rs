//! Service layer - Business logic orchestration.

mod user_service;

pub use user_service::UserManager;
