//! Two-tier product pricing using decimal arithmetic.
//!
//! Every product carries a retail and a wholesale price in the shop's
//! currency. The tier that applies to a sale is chosen by the order type,
//! never stored on the order itself; line items snapshot the unit price that
//! was actually charged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::OrderType;

/// Retail and wholesale prices for a product, in currency units.
///
/// Serialized inline into the product document as `priceRetail` /
/// `priceWholesale` JSON numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Price per unit for retail customers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_retail: Decimal,
    /// Price per unit for wholesale customers.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_wholesale: Decimal,
}

impl Pricing {
    /// Create a new price pair.
    #[must_use]
    pub const fn new(price_retail: Decimal, price_wholesale: Decimal) -> Self {
        Self {
            price_retail,
            price_wholesale,
        }
    }

    /// The unit price charged for the given order type.
    #[must_use]
    pub const fn for_order_type(&self, order_type: OrderType) -> Decimal {
        match order_type {
            OrderType::Retail => self.price_retail,
            OrderType::Wholesale => self.price_wholesale,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_for_order_type() {
        let pricing = Pricing::new(Decimal::from(1200), Decimal::from(950));
        assert_eq!(pricing.for_order_type(OrderType::Retail), Decimal::from(1200));
        assert_eq!(
            pricing.for_order_type(OrderType::Wholesale),
            Decimal::from(950)
        );
    }

    #[test]
    fn test_serialized_as_numbers() {
        let pricing = Pricing::new(Decimal::from(1200), Decimal::from(950));
        let json = serde_json::to_value(&pricing).unwrap();
        assert_eq!(json["priceRetail"], 1200.0);
        assert_eq!(json["priceWholesale"], 950.0);
    }

    #[test]
    fn test_deserializes_from_numbers() {
        let pricing: Pricing =
            serde_json::from_str(r#"{"priceRetail": 1500.5, "priceWholesale": 1100}"#).unwrap();
        assert_eq!(pricing.price_retail, Decimal::try_from(1500.5).unwrap());
        assert_eq!(pricing.price_wholesale, Decimal::from(1100));
    }
}
