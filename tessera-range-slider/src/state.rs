//! Shared handle to a controller.
//!
//! Input handlers, render code and form glue usually live in separate
//! closures. `State<T>` lets them all reach the same controller; every access
//! goes through a closure so a handler completes its read-validate-write
//! before the next one runs.

use std::{fmt, sync::Arc};

use parking_lot::RwLock;

/// Cloneable handle to shared state.
///
/// # Examples
///
/// ```
/// use tessera_range_slider::{RangeSliderArgs, RangeSliderController, State};
///
/// let controller = RangeSliderController::new(RangeSliderArgs::default(), None).unwrap();
/// let state = State::new(controller);
/// let reader = state.clone();
///
/// state.with_mut(|c| c.set_value(10.0, 20.0));
/// assert_eq!(reader.with(|c| c.value().to_array()), [10.0, 20.0]);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    /// Wraps `value` in a new shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Execute a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Execute a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Get a cloned value. Requires `T: Clone`.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&*self.inner.read()).finish()
    }
}
