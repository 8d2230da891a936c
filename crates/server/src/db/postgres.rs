//! Managed PostgreSQL backend.
//!
//! Products and orders are stored as whole JSONB documents in collection
//! tables, addressed by the application-assigned `id` column. Catalog order
//! lives in the numeric `position` column, not in the documents.

use std::time::Duration;

use granel_core::{OrderId, OrderStatus, ProductId};
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use super::StoreError;
use crate::models::{Order, Product};

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// PostgreSQL-backed store.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wrap an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a fresh pool for the given URL.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Database` if the pool cannot be created.
    pub async fn connect(database_url: &secrecy::SecretString) -> Result<Self, StoreError> {
        Ok(Self::new(create_pool(database_url).await?))
    }

    /// The underlying pool (used by the readiness probe).
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    // --- Products ---

    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query("SELECT doc FROM products ORDER BY position, id")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(serde_json::from_value(doc)?)
            })
            .collect()
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query("SELECT doc FROM products WHERE doc->>'slug' = $1 LIMIT 1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(Some(serde_json::from_value(doc)?))
            }
            None => Ok(None),
        }
    }

    /// Upsert one product. New products are appended to the end of the
    /// catalog order; existing ones keep their position.
    pub async fn upsert_product(&self, product: &Product) -> Result<(), StoreError> {
        let doc = serde_json::to_value(product)?;
        sqlx::query(
            r"
            INSERT INTO products (id, doc, position)
            VALUES ($1, $2, (SELECT COALESCE(MAX(position) + 1, 0) FROM products))
            ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc
            ",
        )
        .bind(product.id.as_str())
        .bind(doc)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Rewrite positions from the candidate sequence in one transaction.
    ///
    /// Like the document stores this table models, entries absent from the
    /// candidate are left in place (upsert, not replace); position is the
    /// candidate index.
    pub async fn reorder_products(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        for (position, product) in (0_i32..).zip(products) {
            let doc = serde_json::to_value(product)?;
            sqlx::query(
                r"
                INSERT INTO products (id, doc, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc, position = EXCLUDED.position
                ",
            )
            .bind(product.id.as_str())
            .bind(doc)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// Batch upsert for catalog sync; existing rows keep their position.
    pub async fn bulk_upsert_products(&self, products: &[Product]) -> Result<usize, StoreError> {
        let mut tx = self.pool.begin().await?;
        for product in products {
            let doc = serde_json::to_value(product)?;
            sqlx::query(
                r"
                INSERT INTO products (id, doc, position)
                VALUES ($1, $2, (SELECT COALESCE(MAX(position) + 1, 0) FROM products))
                ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc
                ",
            )
            .bind(product.id.as_str())
            .bind(doc)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(products.len())
    }

    // --- Orders ---

    pub async fn orders(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query("SELECT doc FROM orders ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let doc: serde_json::Value = row.try_get("doc")?;
                Ok(serde_json::from_value(doc)?)
            })
            .collect()
    }

    pub async fn append_order(&self, order: &Order) -> Result<(), StoreError> {
        let doc = serde_json::to_value(order)?;
        sqlx::query("INSERT INTO orders (id, doc, created_at) VALUES ($1, $2, $3)")
            .bind(order.id.as_str())
            .bind(doc)
            .bind(order.date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Patch the status inside the stored document. Zero rows affected means
    /// the id was unknown; that is not an error.
    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let status = serde_json::to_value(status)?;
        sqlx::query("UPDATE orders SET doc = jsonb_set(doc, '{status}', $2) WHERE id = $1")
            .bind(id.as_str())
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
