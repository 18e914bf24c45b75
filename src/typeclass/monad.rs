//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Outcome;
//! use lambseq::typeclass::Monad;
//!
//! fn checked_half(value: i32) -> Outcome<String, i32> {
//!     if value % 2 == 0 {
//!         Outcome::Success(value / 2)
//!     } else {
//!         Outcome::Failure(format!("{value} is odd"))
//!     }
//! }
//!
//! let start: Outcome<String, i32> = Outcome::Success(8);
//! assert_eq!(start.and_then(checked_half).and_then(checked_half), Outcome::Success(2));
//! ```

use super::applicative::Applicative;
#[cfg(feature = "control")]
use crate::control::{Optional, Outcome};

/// A type class for applicatives whose next computation may depend on the
/// previous value.
pub trait Monad: Applicative {
    /// Applies a function returning a wrapped value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// If `self` is absent or failed, that is propagated and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

#[cfg(feature = "control")]
impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(feature = "control")]
impl<E: Clone, S> Monad for Outcome<E, S> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Outcome<E, B>
    where
        F: FnOnce(S) -> Outcome<E, B>,
    {
        Self::flat_map(self, function)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reciprocal(value: i32) -> Optional<f64> {
        if value == 0 {
            Optional::absent()
        } else {
            Optional::present(1.0 / f64::from(value))
        }
    }

    #[rstest]
    fn optional_and_then_stops_at_absent() {
        assert_eq!(Optional::present(0).and_then(reciprocal), Optional::absent());
        assert_eq!(Optional::present(4).and_then(reciprocal), Optional::present(0.25));
    }

    #[rstest]
    fn optional_then_keeps_absent() {
        let absent: Optional<i32> = Optional::absent();
        assert_eq!(absent.then(Optional::present("next")), Optional::absent());
        assert_eq!(Optional::present(1).then(Optional::present("next")), Optional::present("next"));
    }

    #[rstest]
    fn outcome_then_propagates_failure() {
        let failure: Outcome<&str, i32> = Outcome::Failure("first");
        assert_eq!(failure.then(Outcome::<&str, char>::Success('x')), Outcome::Failure("first"));
    }
}
