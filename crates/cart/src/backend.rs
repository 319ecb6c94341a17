use async_trait::async_trait;
use cart_domain::{Product, ProductId};

use crate::Result;

/// Write-through persistence contract shared by the cart's backends.
///
/// The cart applies each mutation in memory first, then hands the backend
/// both the affected product and the full post-mutation sequence, so a
/// per-row implementation can persist the one change while a snapshot
/// implementation rewrites the whole collection. No transaction spans the
/// in-memory step and the persistence step.
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Persists a newly added product. `items` is the full sequence after
    /// the append.
    async fn product_added(&self, product: &Product, items: &[Product]) -> Result<()>;

    /// Persists a removal by id, returning true when storage itself
    /// removed something. `items` is the full sequence after the in-memory
    /// removal (unchanged when nothing matched in memory).
    async fn product_removed(&self, id: ProductId, items: &[Product]) -> Result<bool>;

    /// Persists an emptied cart.
    async fn cart_cleared(&self) -> Result<()>;

    /// Loads the persisted cart, or `None` when this backend cannot
    /// rebuild one.
    async fn load(&self) -> Result<Option<Vec<Product>>>;
}
