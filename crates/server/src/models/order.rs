//! Customer orders.

use chrono::{DateTime, Utc};
use granel_core::{Email, OrderId, OrderStatus, OrderType, ProductId, Unit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Contact snapshot taken at checkout.
///
/// Orders never reference a customer entity; the snapshot is all there is.
/// The customer list is derived later by grouping these snapshots by
/// normalized email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: String,
}

impl OrderCustomer {
    /// Display name, as shown in order listings.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One line of an order, with the unit price that was actually charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price at time of sale, after tier selection.
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Amount sold; fractional for goods sold by weight.
    #[serde(with = "rust_decimal::serde::float")]
    pub quantity: Decimal,
    pub unit: Unit,
}

/// A placed order.
///
/// Immutable once created except for `status`. The stored `total` is the
/// figure the client submitted; it is not re-derived from the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer: OrderCustomer,
    pub items: Vec<OrderItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
}
