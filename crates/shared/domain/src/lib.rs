//! Domain layer - Core user-directory entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user record, its enumerations, form validation and profile photo
//! conversion.

pub mod constants;
pub mod error;
pub mod form;
pub mod media;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use form::UserForm;
pub use media::{is_image_data_url, mime_for_extension, ImageUpload};
pub use user::{NewUser, User, UserRole, UserStatus};
