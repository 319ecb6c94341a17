//! Cart error types.

use cart_store::StoreError;
use thiserror::Error;

/// Errors that can occur during cart operations.
///
/// Storage failures are never recovered inside the cart; they propagate to
/// the caller, which owns any retry policy. Validation failures are not
/// errors at this level: [`crate::Cart::add`] reports them as `Ok(false)`.
#[derive(Debug, Error)]
pub enum CartError {
    /// The underlying row or blob store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The persisted cart snapshot could not be parsed.
    #[error("Malformed cart snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}

/// Result type for cart operations.
pub type Result<T> = std::result::Result<T, CartError>;
