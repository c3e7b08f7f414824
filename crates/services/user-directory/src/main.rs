//! User Directory - Application entry point
//!
//! CLI-based entry point that dispatches to the user commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_directory::{
    cli::{Cli, Commands},
    commands::{self, users},
    config::UserDirectoryConfig,
};

fn main() {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = UserDirectoryConfig::from_env().with_data_dir(cli.data_dir);

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config.service.log_level);
    tracing::debug!(service = %config.service.service_name, "Configuration loaded: {:?}", config.storage);

    let mut manager = commands::open_manager(&config);

    // Execute command
    let result = match cli.command {
        Commands::List(args) => users::list(&manager, args),
        Commands::Add(args) => users::add(&mut manager, args),
        Commands::Edit(args) => users::edit(&mut manager, args),
        Commands::Delete { id } => users::delete(&mut manager, id),
        Commands::Stats => users::stats(&manager),
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
