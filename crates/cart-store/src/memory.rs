use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{BlobStore, ProductRow, Result, RowStore};

/// In-memory row store implementation for testing.
///
/// Rows live in a plain `Vec` so tests can also stage states a keyed
/// engine would normally prevent, such as duplicate-id rows.
#[derive(Clone, Default)]
pub struct InMemoryRowStore {
    rows: Arc<RwLock<Vec<ProductRow>>>,
}

impl InMemoryRowStore {
    /// Creates a new empty in-memory row store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored rows.
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns a copy of all stored rows in insertion order.
    pub async fn rows(&self) -> Vec<ProductRow> {
        self.rows.read().await.clone()
    }

    /// Appends a row without upsert keying.
    ///
    /// Test support: lets a scenario stage duplicate-id rows to exercise
    /// the delete-all-matching contract of [`RowStore::delete_by_id`].
    pub async fn insert_unchecked(&self, row: ProductRow) {
        self.rows.write().await.push(row);
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn init_schema(&self) -> Result<()> {
        // Nothing to create; the Vec is the table.
        Ok(())
    }

    async fn upsert(&self, row: &ProductRow) -> Result<()> {
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|existing| existing.id == row.id) {
            Some(existing) => *existing = row.clone(),
            None => rows.push(row.clone()),
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut rows = self.rows.write().await;
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn fetch_all(&self) -> Result<Vec<ProductRow>> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|row| row.id);
        Ok(rows)
    }
}

/// In-memory blob store implementation for testing.
///
/// Clones share the same underlying map, so a "fresh session" against the
/// same storage is just another clone.
#[derive(Clone, Default)]
pub struct InMemoryBlobStore {
    blobs: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    /// Creates a new empty in-memory blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored blobs.
    pub async fn blob_count(&self) -> usize {
        self.blobs.read().await.len()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .write()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, price: f64) -> ProductRow {
        ProductRow {
            id,
            name: name.to_string(),
            price,
            category: "Tools".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_inserts_then_overwrites() {
        let store = InMemoryRowStore::new();

        store.upsert(&row(1, "Widget", 9.99)).await.unwrap();
        store.upsert(&row(1, "Widget", 12.50)).await.unwrap();

        let rows = store.fetch_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].price, 12.50);
    }

    #[tokio::test]
    async fn delete_by_id_removes_all_matching_rows() {
        let store = InMemoryRowStore::new();
        store.insert_unchecked(row(1, "Widget", 9.99)).await;
        store.insert_unchecked(row(1, "Widget", 12.50)).await;
        store.insert_unchecked(row(2, "Hammer", 5.00)).await;

        assert_eq!(store.delete_by_id(1).await.unwrap(), 2);
        assert_eq!(store.delete_by_id(1).await.unwrap(), 0);
        assert_eq!(store.row_count().await, 1);
    }

    #[tokio::test]
    async fn fetch_all_orders_by_id() {
        let store = InMemoryRowStore::new();
        store.upsert(&row(2, "Hammer", 5.00)).await.unwrap();
        store.upsert(&row(1, "Widget", 9.99)).await.unwrap();

        let ids: Vec<i64> = store
            .fetch_all()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn blob_store_replaces_values_wholesale() {
        let store = InMemoryBlobStore::new();

        assert_eq!(store.get("shopease.cart").await.unwrap(), None);

        store.set("shopease.cart", "[]").await.unwrap();
        store.set("shopease.cart", "[1]").await.unwrap();

        assert_eq!(
            store.get("shopease.cart").await.unwrap().as_deref(),
            Some("[1]")
        );
        assert_eq!(store.blob_count().await, 1);
    }

    #[tokio::test]
    async fn blob_store_clones_share_storage() {
        let store = InMemoryBlobStore::new();
        let other_session = store.clone();

        store.set("shopease.cart", "[]").await.unwrap();
        assert_eq!(
            other_session.get("shopease.cart").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
