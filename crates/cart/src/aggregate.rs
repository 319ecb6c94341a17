//! The cart aggregate.

use cart_domain::{Money, Product, ProductId};

use crate::{CartBackend, ChangeNotifier, ObserverHandle, Result};

/// The in-memory cart, mirrored write-through into its backend.
///
/// The sequence preserves insertion order and permits duplicate ids; it is
/// never deduplicated on add. The keyed row backend, by contrast, holds at
/// most one row per id, so duplicate entries desynchronize row counts
/// between memory and storage. That divergence is deliberate and
/// demonstrated in the integration tests rather than silently repaired.
///
/// A cart lives for the duration of a session and owns its products
/// exclusively. Mutations take `&mut self`, which is also what makes the
/// hydration flag's check-then-set race-free without further guards.
pub struct Cart<B: CartBackend> {
    items: Vec<Product>,
    backend: B,
    notifier: ChangeNotifier,
    hydrated: bool,
}

impl<B: CartBackend> Cart<B> {
    /// Creates an empty cart over the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            items: Vec::new(),
            backend,
            notifier: ChangeNotifier::new(),
            hydrated: false,
        }
    }

    /// Loads the persisted cart into memory, once.
    ///
    /// The first call replaces the whole in-memory sequence with whatever
    /// the backend can rebuild (a destructive load, not a merge) and
    /// notifies observers even when nothing was stored; later calls are
    /// no-ops. Backends without a readable form, like the row mirror,
    /// leave the cart empty.
    #[tracing::instrument(skip(self))]
    pub async fn hydrate(&mut self) -> Result<()> {
        if self.hydrated {
            return Ok(());
        }

        if let Some(items) = self.backend.load().await? {
            self.items = items;
        }

        self.hydrated = true;
        self.notifier.notify();
        Ok(())
    }

    /// Sanitizes, validates, and appends a product, writing through to the
    /// backend.
    ///
    /// Returns `Ok(false)` when validation rejects the product: nothing is
    /// persisted and no observer fires, and the caller decides whether to
    /// retry with corrected input. Duplicate ids are permitted; the entry
    /// is always appended at the end.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn add(&mut self, mut product: Product) -> Result<bool> {
        product.sanitize();
        if let Err(error) = product.validate() {
            tracing::debug!(%error, "rejected invalid product");
            return Ok(false);
        }

        self.items.push(product.clone());
        self.backend.product_added(&product, &self.items).await?;
        metrics::counter!("cart_products_added").increment(1);

        self.notifier.notify();
        Ok(true)
    }

    /// Removes the first in-memory product with the given id and
    /// independently issues the backend removal.
    ///
    /// Returns true when either side had an effect. The two are not kept
    /// in lockstep: with duplicate ids in memory, a keyed row store
    /// deletes every row for the id while only one in-memory entry goes,
    /// and an id that exists only in storage still reports true.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&mut self, id: ProductId) -> Result<bool> {
        let removed_in_memory = match self.items.iter().position(|item| item.id == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        };

        let removed_in_store = self.backend.product_removed(id, &self.items).await?;

        let removed = removed_in_memory || removed_in_store;
        if removed {
            metrics::counter!("cart_products_removed").increment(1);
            self.notifier.notify();
        }
        Ok(removed)
    }

    /// Empties the cart and writes through.
    ///
    /// A no-op when already empty: no persistence call, no notification.
    #[tracing::instrument(skip(self))]
    pub async fn clear(&mut self) -> Result<()> {
        if self.items.is_empty() {
            return Ok(());
        }

        self.items.clear();
        self.backend.cart_cleared().await?;

        self.notifier.notify();
        Ok(())
    }

    /// Sum of all line prices, accumulated in exact cents.
    ///
    /// Addition over cents is commutative and associative, so the total is
    /// identical however the sequence is traversed.
    pub fn total(&self) -> Money {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gets a reference to the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Registers a cart-changed observer.
    pub fn subscribe(&mut self, observer: impl Fn() + Send + Sync + 'static) -> ObserverHandle {
        self.notifier.subscribe(observer)
    }

    /// Removes a previously registered observer.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        self.notifier.unsubscribe(handle)
    }
}
