//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `GRANEL_HOST` - Bind address (default: 127.0.0.1)
//! - `GRANEL_PORT` - Listen port (default: 3000)
//! - `GRANEL_CLOUD` - Boolean-like flag; truthy values (`1`, `true`, `yes`)
//!   select the managed PostgreSQL backend, anything else the local JSON file
//! - `GRANEL_DB_PATH` - Path of the JSON document in file mode
//!   (default: data/db.json)
//! - `GRANEL_UPLOAD_DIR` - Public upload directory (default: public/uploads)
//!
//! ## Required in cloud mode
//! - `GRANEL_DATABASE_URL` - PostgreSQL connection string (falls back to
//!   `DATABASE_URL`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which persistence backend the process runs against.
///
/// Decided exactly once, at configuration load. Nothing downstream of
/// [`GranelConfig::from_env`] re-reads the environment to pick a backend.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Whole-document JSON file on local disk.
    File {
        /// Path of the JSON document.
        path: PathBuf,
    },
    /// Managed PostgreSQL database.
    Postgres {
        /// Connection URL (contains password).
        database_url: SecretString,
    },
}

/// Granel application configuration.
#[derive(Debug, Clone)]
pub struct GranelConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Selected persistence backend
    pub storage: StorageConfig,
    /// Path of the local JSON document (also used by catalog sync in cloud mode)
    pub data_path: PathBuf,
    /// Directory where uploaded files are stored and served from
    pub upload_dir: PathBuf,
}

impl GranelConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse, or if cloud mode
    /// is selected without a database URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("GRANEL_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("GRANEL_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("GRANEL_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("GRANEL_PORT".to_string(), e.to_string()))?;

        let data_path = PathBuf::from(get_env_or_default("GRANEL_DB_PATH", "data/db.json"));
        let upload_dir = PathBuf::from(get_env_or_default("GRANEL_UPLOAD_DIR", "public/uploads"));

        let storage = if is_truthy(&get_env_or_default("GRANEL_CLOUD", "")) {
            StorageConfig::Postgres {
                database_url: get_database_url("GRANEL_DATABASE_URL")?,
            }
        } else {
            StorageConfig::File {
                path: data_path.clone(),
            }
        };

        Ok(Self {
            host,
            port,
            storage,
            data_path,
            upload_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the process runs against the managed database.
    #[must_use]
    pub const fn is_cloud(&self) -> bool {
        matches!(self.storage, StorageConfig::Postgres { .. })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get database URL with fallback to generic `DATABASE_URL` (set by managed
/// hosting when a database is attached).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Interpret a boolean-like deployment flag.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
