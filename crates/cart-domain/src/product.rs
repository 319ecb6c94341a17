//! The product entity and its sanitize/validate pipeline.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

/// Unique identifier for a product.
///
/// Wraps the integer key used by both persistence backends to provide type
/// safety and prevent mixing product ids with other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product ID from an integer key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying integer key.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// A cart line item.
///
/// Serde field names follow the wire contract shared with the relational
/// schema: `ProductID`, `Name`, `Price`, `Category`. Every product is
/// expected to pass [`Product::sanitize`] and [`Product::validate`] before
/// it is admitted into the cart or either store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier, intended as the unique storage key.
    #[serde(rename = "ProductID")]
    pub id: ProductId,

    /// Human-readable product name.
    #[serde(rename = "Name")]
    pub name: String,

    /// Unit price.
    #[serde(rename = "Price")]
    pub price: Money,

    /// Category the product is listed under.
    #[serde(rename = "Category")]
    pub category: String,
}

impl Product {
    /// Maximum accepted name length, counted in characters.
    pub const MAX_NAME_LENGTH: usize = 100;

    /// Maximum accepted category length, counted in characters.
    pub const MAX_CATEGORY_LENGTH: usize = 50;

    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: category.into(),
        }
    }

    /// Sanitizes the text fields in place.
    ///
    /// Trims surrounding whitespace and strips the `<` and `>` characters
    /// from `name` and `category`, a minimal defense against markup
    /// injection on display paths. Whitespace-only input normalizes to the
    /// empty string; sanitization itself never fails.
    pub fn sanitize(&mut self) {
        self.name = sanitize_text(&self.name);
        self.category = sanitize_text(&self.category);
    }

    /// Validates the product, reporting the first failing check.
    ///
    /// Check order is part of the contract: name present, category present,
    /// name length, category length, price sign. Lengths are counted in
    /// characters, matching the documented 100/50 limits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }

        if self.category.trim().is_empty() {
            return Err(ValidationError::CategoryRequired);
        }

        if self.name.chars().count() > Self::MAX_NAME_LENGTH {
            return Err(ValidationError::NameTooLong);
        }

        if self.category.chars().count() > Self::MAX_CATEGORY_LENGTH {
            return Err(ValidationError::CategoryTooLong);
        }

        if self.price.is_negative() {
            return Err(ValidationError::NegativePrice);
        }

        Ok(())
    }
}

fn sanitize_text(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    trimmed.chars().filter(|c| *c != '<' && *c != '>').collect()
}
