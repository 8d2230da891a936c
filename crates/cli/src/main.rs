//! Granel CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations against the managed backend
//! granel-cli migrate
//!
//! # Seed the configured backend with a starter catalog
//! granel-cli seed
//!
//! # Overwrite products that already exist while seeding
//! granel-cli seed --force
//!
//! # Push the local JSON document's catalog into the managed database
//! granel-cli sync
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Seed the store with a starter catalog
//! - `sync` - Upsert the local catalog into the managed database

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "granel-cli")]
#[command(author, version, about = "Granel CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations against the managed backend
    Migrate,
    /// Seed the configured backend with a starter catalog
    Seed {
        /// Overwrite products whose ids already exist
        #[arg(short, long)]
        force: bool,
    },
    /// Upsert the local JSON document's catalog into the managed database
    Sync,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "granel_cli=info,granel_server=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { force } => commands::seed::run(force).await,
        Commands::Sync => commands::sync::run().await,
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
