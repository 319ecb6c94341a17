use async_trait::async_trait;

use crate::Result;

/// Key-value capability for whole-collection snapshot persistence.
///
/// Modeled after host-provided stores such as browser `localStorage`: one
/// opaque string per key, read in full and replaced in full. The cart core
/// never depends on a specific host runtime, only on this interface.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns the blob stored under `key`, or `None` when absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `blob` under `key`, replacing any previous value.
    async fn set(&self, key: &str, blob: &str) -> Result<()>;
}
