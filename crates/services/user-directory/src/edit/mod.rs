//! Edit session layer.

mod session;

pub use session::{EditDraft, EditField, EditSession};
