//! Derived customer summaries.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view of one customer, derived from their order history.
///
/// Never persisted: recomputed from the full order list on every read. Keyed
/// by normalized email; `name`, `phone`, and `last_order_date` come from the
/// chronologically latest order, while the financial fields accumulate over
/// all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    /// Normalized (trimmed, lower-cased) email used as the grouping key.
    pub email: String,
    pub name: String,
    pub phone: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_spent: Decimal,
    pub order_count: u32,
    pub last_order_date: DateTime<Utc>,
}
