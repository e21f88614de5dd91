//! Observable value holder
//!
//! Wraps a `tokio::sync::watch` channel: readers get the current value or a
//! receiver that wakes on every change, while writing stays inside the crate.

use tokio::sync::watch;

/// Internally mutable value exposed read-only to observers.
pub struct LiveValue<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> LiveValue<T> {
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Subscribe to changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Replace the value and notify every subscriber, even when it is unchanged.
    pub(crate) fn set(&self, value: T) {
        self.tx.send_replace(value);
    }
}

impl<T: Clone + Default> Default for LiveValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + std::fmt::Debug> std::fmt::Debug for LiveValue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveValue")
            .field("value", &*self.tx.borrow())
            .finish()
    }
}
