//! Database migration command.
//!
//! # Environment Variables
//!
//! - `GRANEL_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`)

use secrecy::SecretString;
use tracing::info;

use granel_server::db::create_pool;

/// Run the server migrations against the managed database.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the migrations fail.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env()?;

    info!("Connecting to database...");
    let pool = create_pool(&database_url).await?;

    info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    info!("Migrations complete!");
    Ok(())
}

/// Resolve the database URL, preferring the Granel-specific variable.
pub fn database_url_from_env() -> Result<SecretString, Box<dyn std::error::Error>> {
    if let Ok(value) = std::env::var("GRANEL_DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err("GRANEL_DATABASE_URL not set".into())
}
