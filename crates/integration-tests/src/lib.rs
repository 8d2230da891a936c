//! Integration tests for Granel.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server against a disposable store
//! GRANEL_DB_PATH=/tmp/granel-test.json cargo run -p granel-server
//!
//! # Run the API tests
//! cargo test -p granel-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_api` - Catalog and checkout
//! - `admin_products` - Product CRUD and reordering
//! - `admin_customers` - Customer aggregation and dashboard stats
//! - `uploads` - Multipart upload and static serving

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("GRANEL_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// A JSON product document the admin API accepts.
#[must_use]
pub fn product_json(id: &str, name: &str, retail: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "slug": id,
        "name": name,
        "category": "Frutos Secos",
        "priceRetail": retail,
        "priceWholesale": retail * 0.8,
        "stock": 10,
        "unit": "kg",
        "description": "integration test product"
    })
}

/// A JSON checkout submission.
#[must_use]
pub fn checkout_json(email: &str, total: f64) -> serde_json::Value {
    serde_json::json!({
        "customer": {
            "firstName": "Test",
            "lastName": "Customer",
            "email": email,
            "phone": "11-5555-0000"
        },
        "items": [{
            "productId": "almendras-peladas",
            "name": "Almendras Peladas",
            "unitPrice": total,
            "quantity": 1.0,
            "unit": "kg"
        }],
        "total": total,
        "type": "retail"
    })
}
