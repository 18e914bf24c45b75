//! Value wrappers for absent values and failures.
//!
//! This module provides the wrappers that the sequence engine returns and
//! that user code composes:
//!
//! - [`Optional`]: A value that may be absent
//! - [`Outcome`]: A success value or a failure value (right-biased)
//! - [`Thunk`]: A value or a supplier evaluated on demand
//! - [`OptionalCase`], [`OutcomeCase`]: Cases for exhaustive `match_cases`
//!
//! # Examples
//!
//! ## Chaining Optional Values
//!
//! ```rust
//! use lambseq::control::Optional;
//!
//! fn half(value: i32) -> Optional<i32> {
//!     if value % 2 == 0 { Optional::present(value / 2) } else { Optional::absent() }
//! }
//!
//! assert_eq!(Optional::present(12).flat_map(half).flat_map(half), Optional::present(3));
//! assert_eq!(Optional::present(6).flat_map(half).flat_map(half), Optional::absent());
//! ```
//!
//! ## Exhaustive Case Matching
//!
//! ```rust
//! use lambseq::control::{Outcome, OutcomeCase};
//! use lambseq::error::Error;
//!
//! let success: Outcome<String, i32> = Outcome::Success(2);
//! let forgotten = success.match_cases([OutcomeCase::success(|value: i32| value)]);
//! assert_eq!(forgotten, Err(Error::MissingCaseForVariant { variant: "Failure" }));
//! ```

mod case;
mod optional;
mod outcome;
mod thunk;

pub use case::{Matcher, OptionalCase, OutcomeCase};
pub use optional::Optional;
pub use outcome::Outcome;
pub use thunk::Thunk;
