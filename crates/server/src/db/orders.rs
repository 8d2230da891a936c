//! Order repository and dashboard statistics.

use granel_core::{OrderId, OrderStatus};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Store, StoreError};
use crate::models::Order;

/// How many orders the dashboard shows in its recent list.
const RECENT_ORDERS: usize = 5;

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    pub total_orders: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub average_order_value: Decimal,
    /// The five most recent orders, date descending.
    pub recent_orders: Vec<Order>,
}

/// Repository for order operations.
///
/// Orders are append-only; the only mutation after creation is the status.
pub struct OrderRepository<'a> {
    store: &'a Store,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.store.orders().await
    }

    /// Append one order.
    ///
    /// The total is stored as submitted, without re-deriving it from the
    /// items, and stock is not decremented. There is no idempotency key:
    /// submitting the same cart twice records two orders.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn append(&self, order: &Order) -> Result<(), StoreError> {
        self.store.append_order(order).await
    }

    /// Set the status of an order. An unknown id is a silent no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn update_status(&self, id: &OrderId, status: OrderStatus) -> Result<(), StoreError> {
        self.store.update_order_status(id, status).await
    }

    /// Compute dashboard statistics over the full order history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn stats(&self) -> Result<DashboardStats, StoreError> {
        Ok(compute_stats(self.store.orders().await?))
    }
}

/// Fold the order list into dashboard figures.
///
/// The average divides by one when there are no orders, so an empty shop
/// shows zero instead of an error.
fn compute_stats(orders: Vec<Order>) -> DashboardStats {
    let total_sales: Decimal = orders.iter().map(|o| o.total).sum();
    let total_orders = orders.len();
    let divisor = Decimal::from(total_orders.max(1));

    let mut recent_orders = orders;
    recent_orders.sort_by(|a, b| b.date.cmp(&a.date));
    recent_orders.truncate(RECENT_ORDERS);

    DashboardStats {
        total_sales,
        total_orders,
        average_order_value: total_sales / divisor,
        recent_orders,
    }
}
