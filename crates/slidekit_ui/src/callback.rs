//! Callback abstraction for widget event handlers
//!
//! Widgets store their optional handlers as `Callback<T, M>` instead of
//! spelling out `Option<Box<dyn Fn(T) -> M>>` for every field.
//!
//! ```ignore
//! use slidekit_ui::Callback;
//!
//! struct Pager<M> {
//!     on_page: Callback<usize, M>,
//! }
//!
//! impl<M> Pager<M> {
//!     fn on_page(mut self, f: impl Fn(usize) -> M + 'static) -> Self {
//!         self.on_page = Callback::new(f);
//!         self
//!     }
//! }
//! ```

use std::fmt;

/// An optional event handler turning a `T` into a message `M`.
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `None` if no handler is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}

/// A callback that takes no parameters.
pub type Callback0<M> = Callback<(), M>;

impl<M> Callback0<M> {
    /// Equivalent to `call(())`.
    pub fn emit(&self) -> Option<M> {
        self.call(())
    }
}
