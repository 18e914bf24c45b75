//! Function combinators.
//!
//! The wrappers in [`control`](crate::control) and the sequence engine take
//! plain Rust closures. This module holds the small combinators that are
//! handy when building those closures:
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`flip`]: swaps the arguments of a binary function
//! - [`negate`]: inverts a predicate
//! - [`bind`], [`bind2`]: partial application of leading arguments
//!
//! # Examples
//!
//! ```
//! use lambseq::compose::{bind, identity};
//! use lambseq::control::Optional;
//!
//! let value = Optional::present(5);
//! assert_eq!(value.map(identity), Optional::present(5));
//!
//! let add_one = bind(|first: i32, second: i32| first + second, 1);
//! assert_eq!(value.map(add_one), Optional::present(6));
//! ```
//!
//! # Laws
//!
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//! - **Double Negation**: `negate(negate(p))(x) == p(x)`

mod utils;

pub use utils::{bind, bind2, constant, flip, identity, negate};
