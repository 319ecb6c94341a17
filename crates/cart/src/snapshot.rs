//! Snapshot persistence backend: the whole cart as one JSON blob.

use async_trait::async_trait;
use cart_domain::{Product, ProductId};
use cart_store::BlobStore;

use crate::{CartBackend, Result};

/// Key under which the whole cart is stored in the blob store.
pub const CART_SNAPSHOT_KEY: &str = "shopease.cart";

/// Persists the cart as a single serialized blob under a fixed key.
///
/// Every mutation re-serializes the entire current sequence and replaces
/// the stored blob, however small the change was: O(n) work per write,
/// traded for a one-key storage contract a browser-hosted client can keep
/// in `localStorage`. Hydration is the reverse read; a malformed blob is a
/// fatal parse error, never silently treated as empty.
pub struct SnapshotBackend<S: BlobStore> {
    store: S,
}

impl<S: BlobStore> SnapshotBackend<S> {
    /// Creates a snapshot backend over the given blob store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Gets a reference to the underlying blob store.
    pub fn store(&self) -> &S {
        &self.store
    }

    #[tracing::instrument(skip(self, items), fields(item_count = items.len()))]
    async fn save(&self, items: &[Product]) -> Result<()> {
        let payload = serde_json::to_string(items)?;
        self.store.set(CART_SNAPSHOT_KEY, &payload).await?;
        metrics::counter!("cart_snapshot_writes").increment(1);
        Ok(())
    }
}

#[async_trait]
impl<S: BlobStore> CartBackend for SnapshotBackend<S> {
    async fn product_added(&self, _product: &Product, items: &[Product]) -> Result<()> {
        self.save(items).await
    }

    async fn product_removed(&self, _id: ProductId, items: &[Product]) -> Result<bool> {
        self.save(items).await?;
        // A whole-blob rewrite observes no per-id storage effect; the
        // aggregate's result falls back to the in-memory removal.
        Ok(false)
    }

    async fn cart_cleared(&self) -> Result<()> {
        self.save(&[]).await
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self) -> Result<Option<Vec<Product>>> {
        let Some(payload) = self.store.get(CART_SNAPSHOT_KEY).await? else {
            return Ok(None);
        };

        // Whitespace-only payloads count as absent, like an unset key.
        if payload.trim().is_empty() {
            return Ok(None);
        }

        let items: Vec<Product> = serde_json::from_str(&payload)?;
        tracing::debug!(item_count = items.len(), "cart snapshot loaded");
        Ok(Some(items))
    }
}
