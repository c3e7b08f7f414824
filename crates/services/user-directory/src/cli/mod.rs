//! CLI module - Command-line interface for the directory.
//!
//! Provides commands for:
//! - `list` - Filtered, sorted view of the users
//! - `add` - Create a user
//! - `edit` - Change fields of one user
//! - `delete` - Remove a user
//! - `stats` - Total, active and inactive counts

pub mod args;

pub use args::{AddArgs, Cli, Commands, EditArgs, ListArgs};
