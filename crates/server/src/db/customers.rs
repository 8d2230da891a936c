//! Derived customer list.
//!
//! There is no customer table. The list is a view over the order history:
//! one pass groups orders by normalized email, folding totals and keeping
//! the freshest contact snapshot; a final sort ranks customers by lifetime
//! spend. Every read rescans the full history; acceptable at this shop's
//! order volume, and it keeps the view trivially consistent with the orders.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::{Store, StoreError};
use crate::models::{CustomerSummary, Order};

/// Repository producing the derived customer view.
pub struct CustomerRepository<'a> {
    store: &'a Store,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Aggregate the full order history into customer summaries.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn list(&self) -> Result<Vec<CustomerSummary>, StoreError> {
        Ok(aggregate(&self.store.orders().await?))
    }
}

/// Fold orders into per-customer summaries, sorted by lifetime spend.
///
/// The financial fields (`total_spent`, `order_count`) accumulate
/// unconditionally; the contact snapshot (`name`, `phone`,
/// `last_order_date`) is overwritten only by an order whose date is
/// *strictly* more recent than the stored one, so on a date tie the
/// first-seen snapshot stays.
#[must_use]
pub fn aggregate(orders: &[Order]) -> Vec<CustomerSummary> {
    let mut by_email: HashMap<String, CustomerSummary> = HashMap::new();

    for order in orders {
        let key = order.customer.email.normalized();
        match by_email.entry(key) {
            Entry::Occupied(mut entry) => {
                let summary = entry.get_mut();
                summary.total_spent += order.total;
                summary.order_count += 1;
                if order.date > summary.last_order_date {
                    summary.name = order.customer.full_name();
                    summary.phone = order.customer.phone.clone();
                    summary.last_order_date = order.date;
                }
            }
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(CustomerSummary {
                    email: key,
                    name: order.customer.full_name(),
                    phone: order.customer.phone.clone(),
                    total_spent: order.total,
                    order_count: 1,
                    last_order_date: order.date,
                });
            }
        }
    }

    let mut summaries: Vec<CustomerSummary> = by_email.into_values().collect();
    summaries.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
    summaries
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, Utc};
    use granel_core::{Email, OrderId, OrderStatus, OrderType};
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::OrderCustomer;

    fn order(email: &str, name: (&str, &str), phone: &str, total: i64, date: &str) -> Order {
        Order {
            id: OrderId::generate(),
            customer: OrderCustomer {
                first_name: name.0.to_string(),
                last_name: name.1.to_string(),
                email: Email::parse(email).unwrap(),
                phone: phone.to_string(),
            },
            items: vec![],
            total: Decimal::from(total),
            date: date.parse::<DateTime<Utc>>().unwrap(),
            order_type: OrderType::Retail,
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_single_customer_folds_totals() {
        let orders = vec![
            order("a@x.com", ("Ana", "López"), "111", 100, "2024-01-01T00:00:00Z"),
            order("a@x.com", ("Ana", "López"), "111", 50, "2024-02-01T00:00:00Z"),
        ];

        let summaries = aggregate(&orders);
        assert_eq!(summaries.len(), 1);

        let summary = summaries.first().unwrap();
        assert_eq!(summary.total_spent, Decimal::from(150));
        assert_eq!(summary.order_count, 2);
        assert_eq!(
            summary.last_order_date,
            "2024-02-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn test_emails_normalize_to_one_key() {
        let orders = vec![
            order("Ana@X.com", ("Ana", "López"), "111", 100, "2024-01-01T00:00:00Z"),
            order(" ana@x.com ", ("Ana", "López"), "111", 60, "2024-01-02T00:00:00Z"),
        ];

        let summaries = aggregate(&orders);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries.first().unwrap().email, "ana@x.com");
        assert_eq!(summaries.first().unwrap().total_spent, Decimal::from(160));
    }

    #[test]
    fn test_snapshot_follows_latest_order_regardless_of_iteration_order() {
        // The newer order appears first in the list (stores return newest
        // first); the snapshot must still come from it.
        let orders = vec![
            order("a@x.com", ("Ana María", "López"), "222", 50, "2024-02-01T00:00:00Z"),
            order("a@x.com", ("Ana", "López"), "111", 100, "2024-01-01T00:00:00Z"),
        ];

        let summaries = aggregate(&orders);
        let summary = summaries.first().unwrap();
        assert_eq!(summary.name, "Ana María López");
        assert_eq!(summary.phone, "222");
        assert_eq!(summary.total_spent, Decimal::from(150));
    }

    #[test]
    fn test_date_tie_keeps_first_seen_snapshot() {
        // Strict > comparison: an equal date does not overwrite.
        let orders = vec![
            order("a@x.com", ("Ana", "López"), "111", 100, "2024-01-01T00:00:00Z"),
            order("a@x.com", ("Anita", "López"), "222", 50, "2024-01-01T00:00:00Z"),
        ];

        let summaries = aggregate(&orders);
        let summary = summaries.first().unwrap();
        assert_eq!(summary.name, "Ana López");
        assert_eq!(summary.phone, "111");
        assert_eq!(summary.order_count, 2);
    }

    #[test]
    fn test_sorted_descending_by_total_spent() {
        let orders = vec![
            order("small@x.com", ("S", "S"), "1", 10, "2024-01-01T00:00:00Z"),
            order("big@x.com", ("B", "B"), "2", 500, "2024-01-01T00:00:00Z"),
            order("mid@x.com", ("M", "M"), "3", 100, "2024-01-01T00:00:00Z"),
        ];

        let emails: Vec<String> = aggregate(&orders).into_iter().map(|s| s.email).collect();
        assert_eq!(emails, vec!["big@x.com", "mid@x.com", "small@x.com"]);
    }

    #[test]
    fn test_empty_orders_empty_customers() {
        assert!(aggregate(&[]).is_empty());
    }
}
