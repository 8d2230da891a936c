//! Checkout: turn a submitted cart into an order.

use axum::{Json, extract::State};
use chrono::Utc;
use granel_core::{OrderId, OrderStatus, OrderType};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use crate::db::orders::OrderRepository;
use crate::models::{Order, OrderCustomer, OrderItem};
use crate::state::AppState;

/// Cart submission from the storefront.
///
/// The total comes from the client and is stored as-is; it is not
/// re-derived from the items, and stock is not touched.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub customer: OrderCustomer,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "type")]
    pub order_type: OrderType,
}

/// Place an order.
///
/// Persistence is best-effort: if the write fails, the error is logged
/// together with the full order payload (so the order at least survives in
/// the logs) and the customer still gets a success response. Checkout is
/// never blocked on a persistence hiccup.
#[instrument(skip(state, request))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Json<Order> {
    let order = Order {
        id: OrderId::generate(),
        customer: request.customer,
        items: request.items,
        total: request.total,
        date: Utc::now(),
        order_type: request.order_type,
        status: OrderStatus::Pending,
    };

    match OrderRepository::new(state.store()).append(&order).await {
        Ok(()) => {
            tracing::info!(
                id = %order.id,
                customer = %order.customer.full_name(),
                phone = %order.customer.phone,
                total = %order.total,
                "new order received"
            );
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                order = %serde_json::to_string(&order).unwrap_or_default(),
                "order not persisted; payload logged above"
            );
        }
    }

    Json(order)
}
