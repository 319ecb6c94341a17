//! Domain model for the ShopEase cart.
//!
//! This crate provides the validated product entity and its supporting types:
//! - `Product` and `ProductId`, the line item admitted into the cart
//! - `Money`, an exact integer-cents currency value
//! - the sanitize/validate pipeline every product passes before it reaches
//!   the cart or either persistence backend

pub mod error;
pub mod money;
pub mod product;

pub use error::ValidationError;
pub use money::Money;
pub use product::{Product, ProductId};
