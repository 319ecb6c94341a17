//! The ShopEase cart aggregate and its persistence backends.
//!
//! A single in-memory cart is mirrored write-through into one of two
//! interchangeable backends behind the [`CartBackend`] seam:
//! - [`RowBackend`]: one relational row per product, upserted and deleted
//!   by id, with lazy once-only schema initialization
//! - [`SnapshotBackend`]: the whole cart as one JSON blob, rewritten in
//!   full on every mutation and hydrated back at startup
//!
//! There is no transaction spanning the in-memory step and the persistence
//! step; the two can diverge on a crash in between, and with duplicate ids
//! they diverge by design (see [`Cart::remove`]). After each persisted
//! mutation the cart's [`ChangeNotifier`] fires a payload-free signal and
//! observers re-read the cart.

pub mod aggregate;
pub mod backend;
pub mod error;
pub mod notifier;
pub mod row;
pub mod snapshot;

pub use aggregate::Cart;
pub use backend::CartBackend;
pub use error::{CartError, Result};
pub use notifier::{ChangeNotifier, ObserverHandle};
pub use row::RowBackend;
pub use snapshot::{CART_SNAPSHOT_KEY, SnapshotBackend};
