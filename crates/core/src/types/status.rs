//! Status and classification enums for orders and products.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// A small unordered set: any status may follow any other, there is no
/// enforced state machine. New orders start out [`OrderStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Delivered" => Ok(Self::Delivered),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Customer class for an order, selecting which price tier applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Retail,
    Wholesale,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Retail => write!(f, "retail"),
            Self::Wholesale => write!(f, "wholesale"),
        }
    }
}

/// Unit of sale for a product.
///
/// The shop sells loose goods by weight and packaged goods by piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    G,
    Unidad,
    Paquete,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kg => write!(f, "kg"),
            Self::G => write!(f, "g"),
            Self::Unidad => write!(f, "unidad"),
            Self::Paquete => write!(f, "paquete"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"Pending\""
        );
        let status: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
    }

    #[test]
    fn test_order_status_from_str() {
        assert_eq!("Cancelled".parse::<OrderStatus>().unwrap(), OrderStatus::Cancelled);
        assert!("Shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_type_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderType::Wholesale).unwrap(),
            "\"wholesale\""
        );
        let order_type: OrderType = serde_json::from_str("\"retail\"").unwrap();
        assert_eq!(order_type, OrderType::Retail);
    }

    #[test]
    fn test_unit_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Paquete).unwrap(), "\"paquete\"");
        let unit: Unit = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(unit, Unit::Kg);
    }

    #[test]
    fn test_unit_display_matches_serde() {
        for unit in [Unit::Kg, Unit::G, Unit::Unidad, Unit::Paquete] {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{unit}\""));
        }
    }
}
