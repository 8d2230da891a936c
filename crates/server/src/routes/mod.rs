//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                        - Liveness check
//! GET  /health/ready                  - Readiness check (pings the backend)
//!
//! # Storefront
//! GET  /api/products                  - Catalog in display order
//! GET  /api/products/{slug}           - Product detail
//! POST /api/checkout                  - Place an order (best-effort persist)
//!
//! # Admin
//! GET  /api/admin/orders              - All orders, newest first
//! PUT  /api/admin/orders/{id}/status  - Set order status
//! GET  /api/admin/customers           - Derived customer summaries
//! GET  /api/admin/stats               - Dashboard statistics
//! POST /api/admin/products            - Upsert a product
//! DELETE /api/admin/products/{id}     - Delete a product
//! PUT  /api/admin/products/order      - Replace catalog display order
//! POST /api/admin/sync                - Push local catalog to the managed DB
//! POST /api/upload                    - Multipart image upload
//!
//! # Static
//! GET  /uploads/*                     - Uploaded files (served from disk)
//! ```

pub mod catalog;
pub mod checkout;
pub mod customers;
pub mod orders;
pub mod products;
pub mod sync;
pub mod upload;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Build the API router. Health endpoints and the uploads file service are
/// attached in `main`, next to the listener setup.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Storefront
        .route("/api/products", get(catalog::list))
        .route("/api/products/{slug}", get(catalog::detail))
        .route("/api/checkout", post(checkout::create))
        // Admin
        .route("/api/admin/orders", get(orders::list))
        .route("/api/admin/orders/{id}/status", put(orders::update_status))
        .route("/api/admin/customers", get(customers::list))
        .route("/api/admin/stats", get(orders::stats))
        .route("/api/admin/products", post(products::upsert))
        .route("/api/admin/products/{id}", delete(products::remove))
        .route("/api/admin/products/order", put(products::reorder))
        .route("/api/admin/sync", post(sync::run))
        .route("/api/upload", post(upload::upload))
}
