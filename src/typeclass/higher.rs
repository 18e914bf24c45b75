//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` and `Outcome<F, _>` as type
//! constructors directly. [`TypeConstructor`] names the applied type
//! parameter and how to re-apply the constructor to another type, which is
//! all that `Functor`, `Applicative` and `Monad` need.
//!
//! # Example
//!
//! ```rust
//! use lambseq::control::Optional;
//! use lambseq::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = emptied(Optional::present(42));
//! assert_eq!(absent, Optional::absent());
//! ```

#[cfg(feature = "control")]
use crate::control::{Optional, Outcome};

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

#[cfg(feature = "control")]
impl<F, S> TypeConstructor for Outcome<F, S> {
    type Inner = S;
    type WithType<B> = Outcome<F, B>;
}

#[cfg(all(test, feature = "control"))]
mod tests {
    use super::*;

    #[test]
    fn optional_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Optional<i32>>();
    }

    #[test]
    fn outcome_with_type_preserves_failure_type() {
        fn assert_outcome_with_type<F, S, B>()
        where
            Outcome<F, S>: TypeConstructor<Inner = S, WithType<B> = Outcome<F, B>>,
        {
        }

        assert_outcome_with_type::<String, i32, bool>();
        assert_outcome_with_type::<(), Vec<u8>, char>();
    }
}
