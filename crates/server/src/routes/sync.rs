//! Catalog sync: push the local JSON document into the managed database.
//!
//! Upsert-only: nothing already in the database is deleted. Useful when the
//! shop is maintained against the local file and periodically promoted to
//! the cloud deployment.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::products::ProductRepository;
use crate::db::{FileStore, Store};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Sync result reported to the admin UI.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    /// Products read from the local document and upserted.
    pub count: usize,
}

/// Run the sync.
///
/// Only meaningful when the server runs against the managed backend;
/// in file mode the local document already *is* the store, and the request
/// is rejected with 409.
#[instrument(skip(state))]
pub async fn run(State(state): State<AppState>) -> Result<Json<SyncResponse>> {
    if !matches!(state.store(), Store::Postgres(_)) {
        return Err(AppError::Conflict(
            "server is running in file mode; nothing to sync to".to_string(),
        ));
    }

    let local = FileStore::new(state.config().data_path.clone());
    let products = local.products().await?;
    let count = ProductRepository::new(state.store())
        .bulk_upsert(&products)
        .await?;

    tracing::info!(count, "local catalog synced to managed database");
    Ok(Json(SyncResponse { count }))
}
