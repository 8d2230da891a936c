//! Whole-document JSON file backend.
//!
//! Every operation reads the full document, mutates it in memory, and writes
//! the full document back. There is no lock and no concurrency token; two
//! overlapping writers will lose one of the updates. That matches the source
//! of truth this store replaces: a flat file next to the process, edited by
//! one admin at a time.

use std::path::{Path, PathBuf};

use granel_core::{OrderId, OrderStatus, ProductId};
use serde::{Deserialize, Serialize};

use super::StoreError;
use crate::models::{Order, Product};

/// The one JSON document holding the whole shop.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    orders: Vec<Order>,
}

/// File-backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store over the given document path.
    ///
    /// The file is not touched until the first operation; a missing file
    /// reads as the empty document.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document.
    ///
    /// A file that cannot be read or parsed is "no data yet", not a failure;
    /// an unparsable file is logged and treated as empty.
    async fn read(&self) -> Document {
        let Ok(content) = tokio::fs::read_to_string(&self.path).await else {
            return Document::default();
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unreadable data file, starting empty");
                Document::default()
            }
        }
    }

    /// Write the whole document back, creating the parent directory if
    /// needed. Write failures propagate to the caller.
    async fn write(&self, doc: &Document) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(doc)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    // --- Products ---

    pub async fn products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.read().await.products)
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let doc = self.read().await;
        Ok(doc.products.into_iter().find(|p| p.slug == slug))
    }

    pub async fn upsert_product(&self, product: &Product) -> Result<(), StoreError> {
        let mut doc = self.read().await;
        if let Some(existing) = doc.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product.clone();
        } else {
            doc.products.push(product.clone());
        }
        self.write(&doc).await
    }

    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        let mut doc = self.read().await;
        doc.products.retain(|p| p.id != *id);
        self.write(&doc).await
    }

    pub async fn reorder_products(&self, products: &[Product]) -> Result<(), StoreError> {
        let mut doc = self.read().await;
        doc.products = products.to_vec();
        self.write(&doc).await
    }

    pub async fn bulk_upsert_products(&self, products: &[Product]) -> Result<usize, StoreError> {
        let mut doc = self.read().await;
        for product in products {
            if let Some(existing) = doc.products.iter_mut().find(|p| p.id == product.id) {
                *existing = product.clone();
            } else {
                doc.products.push(product.clone());
            }
        }
        self.write(&doc).await?;
        Ok(products.len())
    }

    // --- Orders ---

    pub async fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.read().await.orders)
    }

    /// New orders go to the front so the document lists newest first.
    pub async fn append_order(&self, order: &Order) -> Result<(), StoreError> {
        let mut doc = self.read().await;
        doc.orders.insert(0, order.clone());
        self.write(&doc).await
    }

    pub async fn update_order_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), StoreError> {
        let mut doc = self.read().await;
        if let Some(order) = doc.orders.iter_mut().find(|o| o.id == *id) {
            order.status = status;
            self.write(&doc).await?;
        }
        Ok(())
    }
}
