//! Product repository.

use granel_core::ProductId;

use super::{Store, StoreError};
use crate::models::Product;

/// Repository for catalog operations.
///
/// A thin, backend-agnostic facade over [`Store`]. There is no pagination
/// and no storage-level filtering; callers filter the full list themselves.
pub struct ProductRepository<'a> {
    store: &'a Store,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All products in display order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.store.products().await
    }

    /// Look up a product by its slug.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend read fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        self.store.product_by_slug(slug).await
    }

    /// Insert or fully replace a product by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn upsert(&self, product: &Product) -> Result<(), StoreError> {
        self.store.upsert_product(product).await
    }

    /// Delete a product by id; removes exactly that id and leaves the
    /// relative order of everything else unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn delete(&self, id: &ProductId) -> Result<(), StoreError> {
        self.store.delete_product(id).await
    }

    /// Replace the catalog display order with the given sequence, verbatim.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn reorder(&self, products: &[Product]) -> Result<(), StoreError> {
        self.store.reorder_products(products).await
    }

    /// Upsert a batch of products (catalog sync); returns the processed count.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub async fn bulk_upsert(&self, products: &[Product]) -> Result<usize, StoreError> {
        self.store.bulk_upsert_products(products).await
    }
}
