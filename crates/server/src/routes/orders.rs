//! Admin order routes.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use granel_core::{OrderId, OrderStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::db::orders::{DashboardStats, OrderRepository};
use crate::error::Result;
use crate::models::Order;
use crate::state::AppState;

/// All orders, newest first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Order>>> {
    let orders = OrderRepository::new(state.store()).list().await?;
    Ok(Json(orders))
}

/// Status change request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// Set an order's status.
///
/// Responds 204 whether or not the id exists; an unknown id is a silent
/// no-op, matching the storage contract.
#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode> {
    OrderRepository::new(state.store())
        .update_status(&OrderId::new(id), request.status)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Dashboard statistics.
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<DashboardStats>> {
    let stats = OrderRepository::new(state.store()).stats().await?;
    Ok(Json(stats))
}
