//! Storage capabilities for the ShopEase cart.
//!
//! Two independent capabilities back the cart, each with its own
//! consistency model:
//! - [`RowStore`]: per-product rows keyed by product id with upsert and
//!   delete semantics, implemented over SQLite
//! - [`BlobStore`]: one opaque value per key, read and replaced in full,
//!   modeling host stores such as browser `localStorage`
//!
//! In-memory implementations of both ship alongside the SQLite row store
//! so the cart can be exercised without a database.

pub mod blob;
pub mod error;
pub mod memory;
pub mod row;
pub mod sqlite;

pub use blob::BlobStore;
pub use error::{Result, StoreError};
pub use memory::{InMemoryBlobStore, InMemoryRowStore};
pub use row::{ProductRow, RowStore};
pub use sqlite::SqliteRowStore;
