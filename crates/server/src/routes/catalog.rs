//! Public catalog routes.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Full catalog in display order.
///
/// Category and search filtering happen client-side; the storage layer
/// always returns the whole list.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.store()).list().await?;
    Ok(Json(products))
}

/// One product by slug.
#[instrument(skip(state))]
pub async fn detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.store())
        .get_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))
}
