//! Functor type class - mapping over wrapped values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Optional;
//! use lambseq::typeclass::Functor;
//!
//! let present: Optional<i32> = Optional::present(5);
//! assert_eq!(present.fmap(|n| n.to_string()), Optional::present("5".to_string()));
//! ```

use super::higher::TypeConstructor;
#[cfg(feature = "control")]
use crate::control::{Optional, Outcome};

/// A type class for types that can have a function mapped over their contents.
///
/// The structure is preserved: an absent value stays absent, a failure stays
/// the same failure.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    /// use lambseq::typeclass::Functor;
    ///
    /// assert_eq!(Optional::present(5).replace("replaced"), Optional::present("replaced"));
    /// assert_eq!(Optional::<i32>::absent().replace("replaced"), Optional::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Outcome<E, S> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<E: Clone, S> Functor for Outcome<E, S> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(&S) -> B,
    {
        match self {
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
            Outcome::Success(value) => Outcome::Success(function(value)),
        }
    }
}
