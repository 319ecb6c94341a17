use thiserror::Error;

/// Errors that can occur when interacting with the cart stores.
///
/// Failures are never handled here; they propagate to the caller, which
/// owns any retry or backoff policy.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
