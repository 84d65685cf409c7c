//! Observable state cells.
//!
//! A [`Signal`] holds one value and notifies its observers every time the
//! value actually changes. Derived views are plain methods that recompute
//! from the current values on read, so nothing here tracks dependencies.
//!
//! ```text
//!   set(v) ──► value == v ? ──yes──► (no-op)
//!                  │
//!                  no
//!                  ▼
//!            store v, then call every observer with &v
//! ```
//!
//! Observers run synchronously on the thread that called `set`, after the
//! value lock has been released, so they may freely call `get()`.

use parking_lot::RwLock;
use std::fmt;

type Observer<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A value cell with change notification.
pub struct Signal<T> {
    value: RwLock<T>,
    observers: RwLock<Vec<Observer<T>>>,
}

impl<T: Clone + PartialEq> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RwLock::new(value),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// Clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Replace the value and notify observers if it changed.
    ///
    /// Returns whether observers were notified.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }

        for observer in self.observers.read().iter() {
            observer(&value);
        }
        true
    }

    /// Register an observer called with every new value.
    ///
    /// The current value is not replayed. Observers live as long as the
    /// signal and must not subscribe to it from inside the callback.
    pub fn subscribe(&self, observer: impl Fn(&T) + Send + Sync + 'static) {
        self.observers.write().push(Box::new(observer));
    }
}

impl<T: Clone + PartialEq + Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("value", &*self.value.read())
            .field("observers", &self.observers.read().len())
            .finish()
    }
}

/// Records every value a signal emits. Test helper.
#[cfg(test)]
pub fn record<T: Clone + PartialEq + Send + 'static>(
    signal: &Signal<T>,
) -> std::sync::Arc<parking_lot::Mutex<Vec<T>>> {
    let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = std::sync::Arc::clone(&seen);
    signal.subscribe(move |value: &T| sink.lock().push(value.clone()));
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let signal = Signal::new(1);
        assert_eq!(signal.get(), 1);
        assert!(signal.set(2));
        assert_eq!(signal.get(), 2);
    }

    #[test]
    fn test_observers_see_changes_in_order() {
        let signal = Signal::new(false);
        let seen = record(&signal);

        signal.set(true);
        signal.set(false);

        assert_eq!(*seen.lock(), vec![true, false]);
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        let signal = Signal::new(String::from("a"));
        let seen = record(&signal);

        assert!(!signal.set(String::from("a")));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_observer_may_read_signal() {
        let signal = std::sync::Arc::new(Signal::new(0));
        let inner = std::sync::Arc::clone(&signal);
        let seen = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        signal.subscribe(move |_| sink.lock().push(inner.get()));

        signal.set(7);
        assert_eq!(*seen.lock(), vec![7]);
    }

    #[test]
    fn test_with_borrows() {
        let signal = Signal::new(vec![1, 2, 3]);
        assert_eq!(signal.with(|v| v.len()), 3);
    }
}
