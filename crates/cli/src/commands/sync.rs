//! Push the local JSON document's catalog into the managed database.
//!
//! CLI twin of the admin sync endpoint: upsert-only, nothing in the
//! database is deleted. Reads the document path and database URL from the
//! same environment the server uses, so `granel-cli sync` works from the
//! deployment directory without extra flags.

use std::path::PathBuf;

use tracing::info;

use granel_server::db::{FileStore, PgStore};

use super::migrate::database_url_from_env;

/// Run the sync.
///
/// # Errors
///
/// Returns an error if the database URL is missing or a storage operation
/// fails. A missing local document is not an error; it syncs zero products.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let data_path = PathBuf::from(
        std::env::var("GRANEL_DB_PATH").unwrap_or_else(|_| "data/db.json".to_string()),
    );
    let database_url = database_url_from_env()?;

    let local = FileStore::new(data_path.clone());
    let products = local.products().await?;
    info!(count = products.len(), path = %data_path.display(), "read local catalog");

    let remote = PgStore::connect(&database_url).await?;
    let count = remote.bulk_upsert_products(&products).await?;

    info!(count, "catalog synced to managed database");
    Ok(())
}
