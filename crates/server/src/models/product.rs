//! Product catalog entry.

use granel_core::{Pricing, ProductId, Unit};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Display order is not a field: it is the product's position in the stored
/// sequence, and only the reorder operation changes it. The persisted JSON
/// uses camelCase names (`priceRetail`, `priceWholesale`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Application-assigned identifier, unique across the catalog.
    pub id: ProductId,
    /// URL key for the storefront detail page.
    pub slug: String,
    pub name: String,
    /// Free-form category label drawn from the shop's fixed set.
    pub category: String,
    #[serde(flatten)]
    pub pricing: Pricing,
    /// Units on hand; informational only, checkout does not decrement it.
    pub stock: u32,
    pub unit: Unit,
    pub description: String,
    /// Public URL of the product image, when one has been uploaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("almendras"),
            slug: "almendras".to_string(),
            name: "Almendras".to_string(),
            category: "Frutos Secos".to_string(),
            pricing: Pricing::new(Decimal::from(1200), Decimal::from(950)),
            stock: 25,
            unit: Unit::Kg,
            description: "Almendras peladas".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_persisted_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["priceRetail"], 1200.0);
        assert_eq!(json["priceWholesale"], 950.0);
        assert_eq!(json["unit"], "kg");
        // image is omitted entirely when absent
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let product = sample();
        let json = serde_json::to_string(&product).unwrap();
        let parsed: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn test_deserializes_document_without_image() {
        let parsed: Product = serde_json::from_str(
            r#"{
                "id": "nueces",
                "slug": "nueces",
                "name": "Nueces",
                "category": "Frutos Secos",
                "priceRetail": 1800,
                "priceWholesale": 1500,
                "stock": 10,
                "unit": "kg",
                "description": ""
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.image, None);
        assert_eq!(parsed.pricing.price_retail, Decimal::from(1800));
    }
}
