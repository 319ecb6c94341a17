//! Row persistence backend: one relational row per product.

use async_trait::async_trait;
use cart_domain::{Product, ProductId};
use cart_store::{ProductRow, RowStore};
use tokio::sync::OnceCell;

use crate::{CartBackend, Result};

/// Persists the cart as individual rows keyed by product id.
///
/// The schema is created lazily, once per adapter instance, before the
/// first operation that needs it. Rows are a write-only mirror: this
/// backend never hydrates the cart, matching the single-session model
/// where the in-memory sequence is the source of truth.
pub struct RowBackend<S: RowStore> {
    store: S,
    schema: OnceCell<()>,
}

impl<S: RowStore> RowBackend<S> {
    /// Creates a row backend over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            schema: OnceCell::new(),
        }
    }

    /// Gets a reference to the underlying row store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the idempotent schema creation exactly once.
    ///
    /// `OnceCell` gives the double-checked shape: once initialized the
    /// check is a cheap lock-free read, and callers racing before the
    /// first success are serialized so `CREATE TABLE IF NOT EXISTS` runs
    /// once. A failed attempt leaves the cell empty and the next caller
    /// retries.
    async fn ensure_schema(&self) -> Result<()> {
        self.schema
            .get_or_try_init(|| self.store.init_schema())
            .await?;
        Ok(())
    }
}

fn row_from_product(product: &Product) -> ProductRow {
    ProductRow {
        id: product.id.as_i64(),
        name: product.name.clone(),
        price: product.price.as_dollars(),
        category: product.category.clone(),
    }
}

#[async_trait]
impl<S: RowStore> CartBackend for RowBackend<S> {
    #[tracing::instrument(skip(self, product, _items), fields(product_id = %product.id))]
    async fn product_added(&self, product: &Product, _items: &[Product]) -> Result<()> {
        self.ensure_schema().await?;
        self.store.upsert(&row_from_product(product)).await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, _items))]
    async fn product_removed(&self, id: ProductId, _items: &[Product]) -> Result<bool> {
        self.ensure_schema().await?;
        let deleted = self.store.delete_by_id(id.as_i64()).await?;
        Ok(deleted > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn cart_cleared(&self) -> Result<()> {
        self.ensure_schema().await?;
        self.store.delete_all().await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Vec<Product>>> {
        Ok(None)
    }
}
