//! # lambseq
//!
//! Algebraic value wrappers and a lazy sequence engine for Rust.
//!
//! ## Overview
//!
//! This library brings two list-processing tools together:
//!
//! - **Value Wrappers**: `Optional` (present or absent) and `Outcome` (success
//!   or failure) with monadic, applicative and case-matching combinators
//! - **Sequence Engine**: Cursors over vectors, maps, strings and generators,
//!   chained through lazy combinators (map, filter, scan, zip, group, span)
//! - **Type Classes**: Functor, Applicative and Monad for the wrappers
//! - **Function Utilities**: identity, constant, flip, negate and partial
//!   application
//!
//! Sequence operations that may find nothing return an `Optional`, and
//! `unfold` stops when its generator returns `Absent`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: Function utilities
//! - `control`: `Optional`, `Outcome`, `Thunk` and case matchers
//! - `sequence`: The cursor engine
//! - `json`: Normalization of `serde_json::Value` input
//! - `serde`: `Serialize` / `Deserialize` for the value wrappers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambseq::prelude::*;
//!
//! let words = normalize(vec!["lazy", "cursors", "compose", "well"]);
//! let longest = words.filter(|word| word.starts_with('c')).maximum_by(|a, b| a.len().cmp(&b.len()));
//! assert_eq!(longest, Optional::present("cursors"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambseq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    pub use crate::error::Error;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
