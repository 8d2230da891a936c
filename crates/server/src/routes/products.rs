//! Admin product management routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use granel_core::ProductId;
use tracing::instrument;

use crate::db::products::ProductRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Insert a new product or fully replace an existing one by id.
#[instrument(skip(state, product))]
pub async fn upsert(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>> {
    ProductRepository::new(state.store()).upsert(&product).await?;
    tracing::info!(id = %product.id, name = %product.name, "product saved");
    Ok(Json(product))
}

/// Delete a product by id.
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode> {
    ProductRepository::new(state.store())
        .delete(&ProductId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the catalog display order with the submitted sequence.
///
/// The sequence is persisted verbatim; position is the array index. No
/// permutation check is performed, so a partial sequence drops products on
/// the file backend; the admin UI always submits the full list.
#[instrument(skip(state, products))]
pub async fn reorder(
    State(state): State<AppState>,
    Json(products): Json<Vec<Product>>,
) -> Result<StatusCode> {
    ProductRepository::new(state.store()).reorder(&products).await?;
    tracing::info!(count = products.len(), "catalog reordered");
    Ok(StatusCode::NO_CONTENT)
}
