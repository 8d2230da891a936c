//! Admin customer routes.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::db::customers::CustomerRepository;
use crate::error::Result;
use crate::models::CustomerSummary;
use crate::state::AppState;

/// Customer summaries derived from the order history, biggest spenders
/// first.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CustomerSummary>>> {
    let customers = CustomerRepository::new(state.store()).list().await?;
    Ok(Json(customers))
}
