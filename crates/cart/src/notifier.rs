//! Cart-changed observer registry.

use std::panic::{AssertUnwindSafe, catch_unwind};

/// Handle identifying a registered observer, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

type Observer = Box<dyn Fn() + Send + Sync>;

/// Registry of zero-argument cart-changed observers.
///
/// The signal carries no payload; observers re-read the cart. Fan-out is
/// fail-isolated: a panicking observer is logged and skipped, and delivery
/// continues to the rest. Delivery order is unspecified.
#[derive(Default)]
pub struct ChangeNotifier {
    next_handle: u64,
    observers: Vec<(ObserverHandle, Observer)>,
}

impl ChangeNotifier {
    /// Creates a new notifier with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an observer, returning the handle that removes it again.
    pub fn subscribe(&mut self, observer: impl Fn() + Send + Sync + 'static) -> ObserverHandle {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, Box::new(observer)));
        handle
    }

    /// Removes an observer; returns false when the handle is unknown.
    pub fn unsubscribe(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != handle);
        self.observers.len() != before
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Invokes every registered observer.
    pub fn notify(&self) {
        for (handle, observer) in &self.observers {
            if catch_unwind(AssertUnwindSafe(|| observer())).is_err() {
                tracing::warn!(handle = handle.0, "cart observer panicked during notification");
            }
        }
    }
}
