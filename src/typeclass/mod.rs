//! Type class traits for the value wrappers.
//!
//! - [`Functor`]: Mapping over wrapped values
//! - [`Applicative`]: Combining independent wrapped values
//! - [`Monad`]: Sequencing dependent computations
//!
//! With the `control` feature, [`Optional`](crate::control::Optional) and
//! [`Outcome`](crate::control::Outcome) implement all three, so code written
//! against the traits works with either wrapper.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). The
//! traits use Generic Associated Types through [`TypeConstructor`] instead.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::{Optional, Outcome};
//! use lambseq::typeclass::{Applicative, Monad};
//!
//! fn add_both<M>(first: M, second: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     first.map2(second, |x, y| x + y)
//! }
//!
//! assert_eq!(add_both(Optional::present(1), Optional::present(2)), Optional::present(3));
//!
//! let failed: Outcome<&str, i32> = Outcome::Failure("no input");
//! assert_eq!(add_both(failed, Outcome::Success(2)), Outcome::Failure("no input"));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
