//! Outcome type - a success value or a failure value.
//!
//! This module provides `Outcome<F, S>`, which is either a `Failure(F)` or a
//! `Success(S)`. It is right-biased: mapping and chaining act on `Success`
//! and pass a `Failure` through untouched.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Outcome;
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input.parse::<i32>().map_err(|error| error.to_string()).into()
//! }
//!
//! assert_eq!(parse("21").map(|value| value * 2), Outcome::Success(42));
//! assert!(parse("x").map(|value| value * 2).is_failure());
//!
//! // Using fold to handle both cases
//! let message = parse("x").fold(|error| format!("bad: {error}"), |value| value.to_string());
//! assert!(message.starts_with("bad: "));
//! ```

use std::any::Any;

use super::case::{self, OutcomeCase};
use super::optional::Optional;
use super::thunk::Thunk;
use crate::compose::{bind, bind2};
use crate::error::{Error, Result};

/// A success value or a failure value.
///
/// # Type Parameters
///
/// * `F` - The type of the failure value
/// * `S` - The type of the success value
///
/// # Examples
///
/// ```rust
/// use lambseq::control::Outcome;
///
/// let success: Outcome<String, i32> = Outcome::Success(42);
/// let failure: Outcome<String, i32> = Outcome::Failure("error".to_string());
///
/// assert_eq!(success.map(|value| value * 2), Outcome::Success(84));
/// assert_eq!(failure.get_or_else(0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<F, S> {
    /// The computation failed with this value.
    Failure(F),
    /// The computation succeeded with this value.
    Success(S),
}

static_assertions::assert_impl_all!(Outcome<&'static str, i32>: Copy, Send, Sync);

impl<F, S> Outcome<F, S> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Success` whose value satisfies `predicate`.
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&S) -> bool,
    {
        match self {
            Self::Failure(_) => false,
            Self::Success(value) => predicate(value),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// The failure value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::{Optional, Outcome};
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("boom");
    /// assert_eq!(failure.failure(), Optional::present("boom"));
    /// assert_eq!(failure.success(), Optional::absent());
    /// ```
    #[inline]
    pub fn failure(self) -> Optional<F> {
        match self {
            Self::Failure(value) => Optional::Present(value),
            Self::Success(_) => Optional::Absent,
        }
    }

    /// The success value, if any.
    #[inline]
    pub fn success(self) -> Optional<S> {
        match self {
            Self::Failure(_) => Optional::Absent,
            Self::Success(value) => Optional::Present(value),
        }
    }

    /// Borrows the failure value, if any.
    #[inline]
    pub const fn failure_ref(&self) -> Optional<&F> {
        match self {
            Self::Failure(value) => Optional::Present(value),
            Self::Success(_) => Optional::Absent,
        }
    }

    /// Borrows the success value, if any.
    #[inline]
    pub const fn success_ref(&self) -> Optional<&S> {
        match self {
            Self::Failure(_) => Optional::Absent,
            Self::Success(value) => Optional::Present(value),
        }
    }

    /// Returns the success value, or evaluates `fallback`.
    ///
    /// A [`Thunk`] fallback needs the success type already known; see
    /// [`Optional::get_or_else`].
    #[inline]
    pub fn get_or_else<'a>(self, fallback: impl Into<Thunk<'a, S>>) -> S {
        match self {
            Self::Failure(_) => fallback.into().evaluate(),
            Self::Success(value) => value,
        }
    }

    /// Returns the success value, or computes one from the failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Outcome;
    ///
    /// let failure: Outcome<&str, usize> = Outcome::Failure("oops");
    /// assert_eq!(failure.get_or_else_with(str::len), 4);
    /// ```
    #[inline]
    pub fn get_or_else_with<G>(self, fallback: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Self::Failure(value) => fallback(value),
            Self::Success(value) => value,
        }
    }

    /// Returns `self` if it is a `Success`, otherwise evaluates `alternative`.
    #[inline]
    pub fn or_else<'a>(self, alternative: impl Into<Thunk<'a, Self>>) -> Self {
        match self {
            Self::Failure(_) => alternative.into().evaluate(),
            Self::Success(_) => self,
        }
    }

    /// Calls `function` with the success value; does nothing for a failure.
    #[inline]
    pub fn each<G>(self, function: G)
    where
        G: FnOnce(S),
    {
        if let Self::Success(value) = self {
            function(value);
        }
    }

    /// Applies `on_failure` or `on_success` depending on the variant.
    #[inline]
    pub fn fold<T, G, H>(self, on_failure: G, on_success: H) -> T
    where
        G: FnOnce(F) -> T,
        H: FnOnce(S) -> T,
    {
        match self {
            Self::Failure(value) => on_failure(value),
            Self::Success(value) => on_success(value),
        }
    }

    /// Exchanges the variants.
    #[inline]
    pub fn swap(self) -> Outcome<S, F> {
        match self {
            Self::Failure(value) => Outcome::Success(value),
            Self::Success(value) => Outcome::Failure(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the success value.
    #[inline]
    pub fn map<T, G>(self, function: G) -> Outcome<F, T>
    where
        G: FnOnce(S) -> T,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(value),
            Self::Success(value) => Outcome::Success(function(value)),
        }
    }

    /// Like [`map`](Self::map), calling `function(first, value)`.
    #[inline]
    pub fn map_with<A, T, G>(self, first: A, function: G) -> Outcome<F, T>
    where
        G: FnOnce(A, S) -> T,
    {
        self.map(bind(function, first))
    }

    /// Like [`map`](Self::map), calling `function(first, second, value)`.
    #[inline]
    pub fn map_with2<A, B, T, G>(self, first: A, second: B, function: G) -> Outcome<F, T>
    where
        G: FnOnce(A, B, S) -> T,
    {
        self.map(bind2(function, first, second))
    }

    /// Applies `function` to the failure value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("boom");
    /// assert_eq!(failure.map_failure(str::len), Outcome::Failure(4));
    /// ```
    #[inline]
    pub fn map_failure<T, G>(self, function: G) -> Outcome<T, S>
    where
        G: FnOnce(F) -> T,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(function(value)),
            Self::Success(value) => Outcome::Success(value),
        }
    }

    /// Maps both sides at once.
    #[inline]
    pub fn bimap<T, U, G, H>(self, on_failure: G, on_success: H) -> Outcome<T, U>
    where
        G: FnOnce(F) -> T,
        H: FnOnce(S) -> U,
    {
        match self {
            Self::Failure(value) => Outcome::Failure(on_failure(value)),
            Self::Success(value) => Outcome::Success(on_success(value)),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Maps with a function returning an outcome and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Outcome;
    ///
    /// fn positive(value: i32) -> Outcome<String, i32> {
    ///     if value > 0 { Outcome::Success(value) } else { Outcome::Failure(format!("{value}")) }
    /// }
    ///
    /// assert_eq!(Outcome::Success(3).flat_map(positive), Outcome::Success(3));
    /// assert_eq!(Outcome::Success(-3).flat_map(positive), Outcome::Failure("-3".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, G>(self, function: G) -> Outcome<F, T>
    where
        G: FnOnce(S) -> Outcome<F, T>,
    {
        self.map(function).flatten()
    }

    /// Like [`flat_map`](Self::flat_map), calling `function(first, value)`.
    #[inline]
    pub fn flat_map_with<A, T, G>(self, first: A, function: G) -> Outcome<F, T>
    where
        G: FnOnce(A, S) -> Outcome<F, T>,
    {
        self.map_with(first, function).flatten()
    }

    /// Like [`flat_map`](Self::flat_map), calling `function(first, second, value)`.
    #[inline]
    pub fn flat_map_with2<A, B, T, G>(self, first: A, second: B, function: G) -> Outcome<F, T>
    where
        G: FnOnce(A, B, S) -> Outcome<F, T>,
    {
        self.map_with2(first, second, function).flatten()
    }

    // =========================================================================
    // Pattern Matching
    // =========================================================================

    /// Evaluates the case of the active variant.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCaseForVariant`] if `Failure` or `Success` has no case.
    /// - [`Error::DuplicateCaseForVariant`] if a variant has two cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::{Outcome, OutcomeCase};
    ///
    /// let failure: Outcome<&str, i32> = Outcome::Failure("boom");
    /// let described = failure.match_cases([
    ///     OutcomeCase::success(|value: i32| value.to_string()),
    ///     OutcomeCase::failure(|error: &str| error.to_uppercase()),
    /// ]);
    /// assert_eq!(described, Ok("BOOM".to_string()));
    /// ```
    pub fn match_cases<'a, R>(
        self,
        cases: impl IntoIterator<Item = OutcomeCase<'a, F, S, R>>,
    ) -> Result<R> {
        let (on_failure, on_success) = case::select(
            cases,
            |case| matches!(case, OutcomeCase::Failure(_)),
            OutcomeCase::variant_name,
            ("Failure", "Success"),
        )?;

        match (self, on_failure, on_success) {
            (Self::Failure(value), OutcomeCase::Failure(matcher), _) => Ok(matcher.evaluate(value)),
            (Self::Success(value), _, OutcomeCase::Success(matcher)) => Ok(matcher.evaluate(value)),
            _ => unreachable!("select sorts cases by variant"),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<F, S> Outcome<F, Outcome<F, S>> {
    /// Removes one level of nesting from the success side.
    #[inline]
    pub fn flatten(self) -> Outcome<F, S> {
        match self {
            Self::Failure(value) => Outcome::Failure(value),
            Self::Success(inner) => inner,
        }
    }
}

impl<F: 'static> Outcome<F, Box<dyn Any>> {
    /// Flattens a type-erased success payload that should hold an `Outcome<F, S>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotNestedResult`] if the success payload is not an
    /// `Outcome<F, S>`.
    pub fn flatten_any<S: 'static>(self) -> Result<Outcome<F, S>> {
        match self {
            Self::Failure(value) => Ok(Outcome::Failure(value)),
            Self::Success(payload) => payload
                .downcast::<Outcome<F, S>>()
                .map(|inner| *inner)
                .map_err(|_| {
                    tracing::debug!("flatten_any on a payload that is not an Outcome");
                    Error::NotNestedResult
                }),
        }
    }
}

// =============================================================================
// Applicative Style
// =============================================================================

impl<F, G> Outcome<F, G> {
    /// Applies the wrapped function to the success value of `other`.
    ///
    /// The first failure encountered, this one before `other`, is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Outcome;
    ///
    /// let add: Outcome<&str, _> = Outcome::Success(|first: i32| move |second: i32| first + second);
    /// assert_eq!(add.ap(Outcome::Success(1)).ap(Outcome::Success(2)), Outcome::Success(3));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Outcome<F, A>) -> Outcome<F, B>
    where
        G: FnOnce(A) -> B,
    {
        self.flat_map(|function| other.map(function))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<F, S> From<std::result::Result<S, F>> for Outcome<F, S> {
    /// `Ok(s)` becomes `Success(s)`, and `Err(f)` becomes `Failure(f)`.
    #[inline]
    fn from(result: std::result::Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<F, S> From<Outcome<F, S>> for std::result::Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<F, S>) -> Self {
        match outcome {
            Outcome::Failure(value) => Err(value),
            Outcome::Success(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    type Parsed = Outcome<String, i32>;

    #[rstest]
    fn test_construction_and_checks() {
        let success: Parsed = Outcome::Success(1);
        let failure: Parsed = Outcome::Failure("bad".to_string());
        assert!(success.is_success() && !success.is_failure());
        assert!(failure.is_failure() && !failure.is_success());
    }

    #[rstest]
    fn test_get_or_else_supplier_runs_only_on_failure() {
        let calls = Cell::new(0);
        let supplier = || {
            calls.set(calls.get() + 1);
            0
        };
        let success: Parsed = Outcome::Success(5);
        assert_eq!(success.get_or_else(Thunk::from_fn(supplier)), 5);
        assert_eq!(calls.get(), 0);

        let failure: Parsed = Outcome::Failure("bad".to_string());
        assert_eq!(failure.get_or_else(Thunk::from_fn(supplier)), 0);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_or_else_keeps_success() {
        let success: Parsed = Outcome::Success(5);
        assert_eq!(success.or_else(Outcome::Success(6)), Outcome::Success(5));
        let failure: Parsed = Outcome::Failure("bad".to_string());
        assert_eq!(failure.or_else(Outcome::Success(6)), Outcome::Success(6));
    }

    #[rstest]
    fn test_map_passes_failure_through() {
        let failure: Parsed = Outcome::Failure("bad".to_string());
        assert_eq!(failure.map(|value| value + 1), Outcome::Failure("bad".to_string()));
    }

    #[rstest]
    fn test_map_with_argument_order() {
        let success: Parsed = Outcome::Success(3);
        let result = success.map_with2(1, 2, |first: i32, second: i32, value: i32| {
            first * 100 + second * 10 + value
        });
        assert_eq!(result, Outcome::Success(123));
    }

    #[rstest]
    fn test_bimap_and_swap() {
        let failure: Parsed = Outcome::Failure("bad".to_string());
        assert_eq!(failure.clone().bimap(|error| error.len(), |value| value * 2), Outcome::Failure(3));
        assert_eq!(failure.swap(), Outcome::Success("bad".to_string()));
    }

    #[rstest]
    #[case(Outcome::Success(Outcome::Success(1)), Outcome::Success(1))]
    #[case(Outcome::Success(Outcome::Failure("inner")), Outcome::Failure("inner"))]
    #[case(Outcome::Failure("outer"), Outcome::Failure("outer"))]
    fn test_flatten(
        #[case] nested: Outcome<&'static str, Outcome<&'static str, i32>>,
        #[case] expected: Outcome<&'static str, i32>,
    ) {
        assert_eq!(nested.flatten(), expected);
    }

    #[rstest]
    fn test_flatten_any() {
        let nested: Outcome<&'static str, Box<dyn Any>> =
            Outcome::Success(Box::new(Outcome::<&'static str, i32>::Success(4)));
        assert_eq!(nested.flatten_any::<i32>(), Ok(Outcome::Success(4)));

        let flat: Outcome<&'static str, Box<dyn Any>> = Outcome::Success(Box::new(4_i32));
        assert_eq!(flat.flatten_any::<i32>(), Err(Error::NotNestedResult));

        let failure: Outcome<&'static str, Box<dyn Any>> = Outcome::Failure("outer");
        assert_eq!(failure.flatten_any::<i32>(), Ok(Outcome::Failure("outer")));
    }

    #[rstest]
    fn test_ap_reports_first_failure() {
        let function: Outcome<&str, fn(i32) -> i32> = Outcome::Failure("function");
        assert_eq!(function.ap(Outcome::Failure("argument")), Outcome::Failure("function"));

        let function: Outcome<&str, fn(i32) -> i32> = Outcome::Success(|value| value + 1);
        assert_eq!(function.ap(Outcome::Failure("argument")), Outcome::Failure("argument"));
    }

    #[rstest]
    fn test_match_cases_checks_both_variants() {
        let success: Parsed = Outcome::Success(1);
        let result = success.match_cases([OutcomeCase::success_value(true)]);
        assert_eq!(result, Err(Error::MissingCaseForVariant { variant: "Failure" }));
    }

    #[rstest]
    fn test_match_cases_rejects_duplicates() {
        let success: Parsed = Outcome::Success(1);
        let result = success.match_cases([
            OutcomeCase::success_value(true),
            OutcomeCase::failure_value(false),
            OutcomeCase::success_value(false),
        ]);
        assert_eq!(result, Err(Error::DuplicateCaseForVariant { variant: "Success" }));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: std::result::Result<i32, String> = Ok(42);
        let outcome: Parsed = ok.into();
        assert_eq!(outcome, Outcome::Success(42));
        let back: std::result::Result<i32, String> = outcome.into();
        assert_eq!(back, Ok(42));
    }

    #[rstest]
    fn test_accessors() {
        let success: Parsed = Outcome::Success(7);
        assert_eq!(success.success_ref(), Optional::present(&7));
        assert_eq!(success.failure_ref(), Optional::absent());
        assert!(success.exists(|value| *value == 7));
        assert_eq!(success.success(), Optional::present(7));
    }
}
