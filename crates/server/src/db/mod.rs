//! Storage layer: one uniform contract, two backends.
//!
//! The deployment flag in [`crate::config`] decides **once**, at process
//! start, whether data lives in a local JSON document ([`FileStore`]) or in
//! PostgreSQL ([`PgStore`]). The selected backend is wrapped in [`Store`] and
//! injected into the repositories through the shared application state;
//! nothing re-reads the environment per call.
//!
//! # Layout
//!
//! - File mode: one JSON document `{ "products": [...], "orders": [...] }`.
//! - Cloud mode: collection tables `products(id, doc, position)` and
//!   `orders(id, doc, created_at)`, addressed by the application-assigned id.
//!   Migrations live in `crates/server/migrations/` and run via:
//!
//! ```bash
//! cargo run -p granel-cli -- migrate
//! ```
//!
//! # Consistency
//!
//! The file backend is whole-document read-modify-write with no locking:
//! concurrent writers can lose updates. The PostgreSQL backend is atomic per
//! statement only; there are no cross-collection transactions. Both are
//! accepted trade-offs at this shop's volume.

pub mod customers;
mod file;
pub mod orders;
mod postgres;
pub mod products;

use crate::config::StorageConfig;
use crate::models::{Order, Product};
use granel_core::{OrderId, OrderStatus, ProductId};

pub use file::FileStore;
pub use postgres::{PgStore, create_pool};

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem error from the file backend.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored document failed to (de)serialize.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The selected persistence backend.
///
/// Enum dispatch rather than a trait object: there are exactly two backends,
/// both known at compile time, and the match keeps the uniform contract in
/// one place.
pub enum Store {
    File(FileStore),
    Postgres(PgStore),
}

impl Store {
    /// Construct the backend selected by configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the PostgreSQL pool cannot be
    /// created. The file backend never fails to construct; a missing file
    /// simply reads as the empty document later.
    pub async fn from_config(storage: &StorageConfig) -> Result<Self, StoreError> {
        match storage {
            StorageConfig::File { path } => Ok(Self::File(FileStore::new(path.clone()))),
            StorageConfig::Postgres { database_url } => {
                Ok(Self::Postgres(PgStore::connect(database_url).await?))
            }
        }
    }

    /// All products, in display order.
    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        match self {
            Self::File(store) => store.products().await,
            Self::Postgres(store) => store.products().await,
        }
    }

    /// Look up a single product by its slug.
    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        match self {
            Self::File(store) => store.product_by_slug(slug).await,
            Self::Postgres(store) => store.product_by_slug(slug).await,
        }
    }

    /// Insert the product, or replace it wholesale if the id already exists.
    pub async fn upsert_product(&self, product: &Product) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.upsert_product(product).await,
            Self::Postgres(store) => store.upsert_product(product).await,
        }
    }

    /// Delete a product by id. Unknown ids are a silent no-op.
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.delete_product(id).await,
            Self::Postgres(store) => store.delete_product(id).await,
        }
    }

    /// Persist the given sequence as the new catalog order, verbatim.
    ///
    /// Position is re-derived from array index. The candidate is **not**
    /// validated to be a permutation of the existing catalog; callers that
    /// pass a partial or duplicated sequence get exactly what they asked for.
    pub async fn reorder_products(&self, products: &[Product]) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.reorder_products(products).await,
            Self::Postgres(store) => store.reorder_products(products).await,
        }
    }

    /// Upsert every product in the batch; returns how many were processed.
    pub async fn bulk_upsert_products(&self, products: &[Product]) -> Result<usize, StoreError> {
        match self {
            Self::File(store) => store.bulk_upsert_products(products).await,
            Self::Postgres(store) => store.bulk_upsert_products(products).await,
        }
    }

    /// All orders, newest first.
    pub async fn orders(&self) -> Result<Vec<Order>, StoreError> {
        match self {
            Self::File(store) => store.orders().await,
            Self::Postgres(store) => store.orders().await,
        }
    }

    /// Append a new order. No validation, no idempotency key.
    pub async fn append_order(&self, order: &Order) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.append_order(order).await,
            Self::Postgres(store) => store.append_order(order).await,
        }
    }

    /// Set the status of an order. Unknown ids are a silent no-op.
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.update_order_status(id, status).await,
            Self::Postgres(store) => store.update_order_status(id, status).await,
        }
    }
}
