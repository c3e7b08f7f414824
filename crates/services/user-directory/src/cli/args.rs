//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// User Directory - Manage a small persisted list of users
#[derive(Parser, Debug)]
#[command(name = "user-directory")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding the stored collection
    #[arg(short, long, global = true, env = "USER_DIRECTORY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List users
    List(ListArgs),

    /// Add a user
    Add(AddArgs),

    /// Edit a user
    Edit(EditArgs),

    /// Delete a user
    Delete {
        /// User id
        id: Uuid,
    },

    /// Show user counts
    Stats,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Case-insensitive text matched against name and email
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Role filter (Admin, User, Guest or all)
    #[arg(short, long, default_value = "all")]
    pub role: String,

    /// Status filter (Active, Inactive or all)
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Sort field (name, email, role, status)
    #[arg(long, default_value = "name")]
    pub sort: String,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the add command
#[derive(Parser, Debug)]
pub struct AddArgs {
    #[arg(short, long)]
    pub name: String,

    #[arg(short, long)]
    pub email: String,

    #[arg(short, long, default_value = "User")]
    pub role: String,

    #[arg(long, default_value = "Active")]
    pub status: String,

    /// Image file or `data:image/...` URL
    #[arg(short, long)]
    pub photo: Option<String>,
}

/// Arguments for the edit command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// User id
    pub id: Uuid,

    #[arg(short, long)]
    pub name: Option<String>,

    #[arg(short, long)]
    pub email: Option<String>,

    #[arg(short, long)]
    pub role: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Image file or `data:image/...` URL
    #[arg(short, long)]
    pub photo: Option<String>,

    /// Remove the profile photo
    #[arg(long, conflicts_with = "photo")]
    pub clear_photo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["user-directory", "list"]).unwrap();
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.role, "all");
                assert_eq!(args.sort, "name");
                assert!(!args.desc);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_edit() {
        let id = Uuid::new_v4();
        let cli = Cli::try_parse_from([
            "user-directory",
            "--verbose",
            "edit",
            &id.to_string(),
            "--name",
            "Anna",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Edit(args) => {
                assert_eq!(args.id, id);
                assert_eq!(args.name.as_deref(), Some("Anna"));
                assert_eq!(args.email, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_delete_rejects_bad_id() {
        assert!(Cli::try_parse_from(["user-directory", "delete", "not-a-uuid"]).is_err());
    }
}
