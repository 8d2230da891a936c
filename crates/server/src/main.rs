//! Granel Server - Storefront and admin API.
//!
//! This binary serves the shop's JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework; the UI is a separate static frontend
//! - Storage selected once at startup: local JSON document or `PostgreSQL`
//! - Uploaded images served straight from disk under `/uploads`
//!
//! Migrations are NOT run automatically on startup. Run them explicitly
//! via: `cargo run -p granel-cli -- migrate`

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use granel_server::config::GranelConfig;
use granel_server::db::Store;
use granel_server::routes;
use granel_server::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "granel_server=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment
    let config = GranelConfig::from_env().expect("Failed to load configuration");
    tracing::info!(cloud = config.is_cloud(), "configuration loaded");

    // Construct the storage backend selected by configuration
    let store = Store::from_config(&config.storage)
        .await
        .expect("Failed to initialize storage backend");

    let upload_dir = config.upload_dir.clone();
    let addr = config.socket_addr();
    let state = AppState::new(config, store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    tracing::info!("granel-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// In file mode the store is always ready. In cloud mode the database is
/// pinged; 503 Service Unavailable if it is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.store() {
        Store::File(_) => StatusCode::OK,
        Store::Postgres(store) => match sqlx::query("SELECT 1").fetch_one(store.pool()).await {
            Ok(_) => StatusCode::OK,
            Err(_) => StatusCode::SERVICE_UNAVAILABLE,
        },
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
