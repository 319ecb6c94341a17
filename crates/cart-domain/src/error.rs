//! Domain error types.

use thiserror::Error;

use crate::product::Product;

/// A product failed validation.
///
/// Checks run in a fixed order and the first failure wins, so a product
/// with several invalid fields reports exactly one error. The messages are
/// the contract a caller surfaces to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name is empty or whitespace-only.
    #[error("Name is required.")]
    NameRequired,

    /// Category is empty or whitespace-only.
    #[error("Category is required.")]
    CategoryRequired,

    /// Name exceeds the maximum length.
    #[error("Name must be {} characters or less.", Product::MAX_NAME_LENGTH)]
    NameTooLong,

    /// Category exceeds the maximum length.
    #[error("Category must be {} characters or less.", Product::MAX_CATEGORY_LENGTH)]
    CategoryTooLong,

    /// Price is negative.
    #[error("Price must be 0 or greater.")]
    NegativePrice,
}
