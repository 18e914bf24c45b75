//! Value-or-supplier parameters.
//!
//! Several operations accept either a ready value or a function that produces
//! it on demand (`get_or_else`, `or_else`, `fold`, the `Absent` match case).
//! [`Thunk`] makes the two shapes explicit. The supplier runs only when the
//! value is actually needed, and at most once.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::{Optional, Thunk};
//!
//! let absent: Optional<i32> = Optional::absent();
//!
//! // A plain value converts into `Thunk::Value`
//! assert_eq!(absent.get_or_else(0), 0);
//!
//! // A closure is wrapped explicitly
//! assert_eq!(absent.get_or_else(Thunk::from_fn(|| 40 + 2)), 42);
//! ```

use std::fmt;

/// A value, or a zero-argument function producing it.
pub enum Thunk<'a, T> {
    /// A value that is already computed.
    Value(T),
    /// A function that computes the value when evaluated.
    Supplier(Box<dyn FnOnce() -> T + 'a>),
}

impl<'a, T> Thunk<'a, T> {
    /// Wraps a supplier function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Thunk;
    ///
    /// let thunk = Thunk::from_fn(|| "computed".to_string());
    /// assert_eq!(thunk.evaluate(), "computed");
    /// ```
    #[inline]
    pub fn from_fn<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::Supplier(Box::new(supplier))
    }

    /// Returns the value, calling the supplier if there is one.
    #[inline]
    pub fn evaluate(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Supplier(supplier) => supplier(),
        }
    }

    /// Returns `true` if this thunk still has to run a supplier.
    #[inline]
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Supplier(_))
    }
}

impl<T> From<T> for Thunk<'_, T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => formatter.debug_tuple("Value").field(value).finish(),
            Self::Supplier(_) => formatter.write_str("Supplier(..)"),
        }
    }
}
