use async_trait::async_trait;

use crate::Result;

/// One persisted cart line in storage shape.
///
/// Price is carried as `f64` to mirror the schema's `REAL` column; exact
/// money arithmetic lives in the domain layer, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

/// Relational capability for per-row cart persistence.
///
/// Every call is an independent, self-contained operation; no transaction
/// spans calls, and implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Creates the backing table if it does not already exist.
    ///
    /// Idempotent; safe to call before every operation.
    async fn init_schema(&self) -> Result<()>;

    /// Inserts the row, or overwrites all non-key fields when a row with
    /// the same id already exists (last write wins).
    async fn upsert(&self, row: &ProductRow) -> Result<()>;

    /// Deletes every row matching `id`, returning the number of rows
    /// removed. Zero is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<u64>;

    /// Deletes every row, returning the number removed.
    async fn delete_all(&self) -> Result<u64>;

    /// Returns all rows ordered by id.
    async fn fetch_all(&self) -> Result<Vec<ProductRow>>;
}
