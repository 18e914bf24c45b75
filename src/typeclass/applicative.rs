//! Applicative type class - combining independent wrapped values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Optional;
//! use lambseq::typeclass::Applicative;
//!
//! let lifted: Optional<i32> = <Optional<()>>::pure(42);
//! assert_eq!(lifted, Optional::present(42));
//!
//! let sum = Optional::present(3).map2(Optional::present(4), |x, y| x + y);
//! assert_eq!(sum, Optional::present(7));
//! ```

use super::functor::Functor;
#[cfg(feature = "control")]
use crate::control::{Optional, Outcome};

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side is absent or failed, so is the result.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    /// use lambseq::typeclass::Applicative;
    ///
    /// let total = Optional::present(1).map3(Optional::present(2), Optional::present(3), |x, y, z| x + y + z);
    /// assert_eq!(total, Optional::present(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both sides and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both sides and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a wrapped function to a wrapped value.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Optional<A> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Present(a), Optional::Present(b), Optional::Present(c)) => {
                Optional::Present(function(a, b, c))
            }
            _ => Optional::Absent,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

// =============================================================================
// Outcome<E, S> Implementation
// =============================================================================

// `E: Clone` is required by the `Functor` supertrait impl (`fmap_ref`).
#[cfg(feature = "control")]
impl<E: Clone, S> Applicative for Outcome<E, S> {
    #[inline]
    fn pure<B>(value: B) -> Outcome<E, B> {
        Outcome::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Outcome<E, B>, function: F) -> Outcome<E, C>
    where
        F: FnOnce(S, B) -> C,
    {
        match (self, other) {
            (Self::Success(a), Outcome::Success(b)) => Outcome::Success(function(a, b)),
            (Self::Failure(error), _) | (_, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Outcome<E, B>,
        third: Outcome<E, C>,
        function: F,
    ) -> Outcome<E, D>
    where
        F: FnOnce(S, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
                Outcome::Success(function(a, b, c))
            }
            (Self::Failure(error), _, _)
            | (_, Outcome::Failure(error), _)
            | (_, _, Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Outcome<E, B>) -> Outcome<E, Output>
    where
        S: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Optional::present(1), Optional::present(2), Optional::present(3))]
    #[case(Optional::present(1), Optional::absent(), Optional::absent())]
    #[case(Optional::absent(), Optional::present(2), Optional::absent())]
    fn optional_map2(
        #[case] first: Optional<i32>,
        #[case] second: Optional<i32>,
        #[case] expected: Optional<i32>,
    ) {
        assert_eq!(first.map2(second, |x, y| x + y), expected);
    }

    #[rstest]
    fn optional_product_pairs_values() {
        assert_eq!(
            Optional::present(1).product(Optional::present("one")),
            Optional::present((1, "one"))
        );
    }

    #[rstest]
    fn outcome_map3_reports_leftmost_failure() {
        let first: Outcome<&str, i32> = Outcome::Success(1);
        let second: Outcome<&str, i32> = Outcome::Failure("second");
        let third: Outcome<&str, i32> = Outcome::Failure("third");
        assert_eq!(first.map3(second, third, |x, y, z| x + y + z), Outcome::Failure("second"));
    }

    #[rstest]
    fn outcome_product_right() {
        let first: Outcome<&str, i32> = Outcome::Success(1);
        assert_eq!(first.product_right(Outcome::Success('r')), Outcome::Success('r'));
    }

    #[rstest]
    fn optional_apply_matches_ap() {
        let function: Optional<fn(i32) -> i32> = Optional::present(|x| x * 3);
        assert_eq!(function.apply(Optional::present(4)), Optional::present(12));
    }
}
