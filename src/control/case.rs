//! Case matchers for `match_cases`.
//!
//! A case is bound to one variant and carries what to produce when that
//! variant is the active one: a constant, or a function of the payload.
//! `match_cases` takes the cases in any order and requires exactly one per
//! variant, so forgetting a case is reported instead of silently defaulting.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::{Optional, OptionalCase};
//!
//! let doubled = Optional::present(3).match_cases([
//!     OptionalCase::absent(0),
//!     OptionalCase::present(|value: i32| value * 2),
//! ]);
//! assert_eq!(doubled, Ok(6));
//! ```

use std::fmt;

use super::thunk::Thunk;

/// What a case produces from the payload of its variant.
pub enum Matcher<'a, T, R> {
    /// Ignore the payload and produce this value.
    Constant(R),
    /// Call this function with the payload.
    Function(Box<dyn FnOnce(T) -> R + 'a>),
}

impl<'a, T, R> Matcher<'a, T, R> {
    /// Wraps a function of the payload.
    #[inline]
    pub fn from_fn<F>(function: F) -> Self
    where
        F: FnOnce(T) -> R + 'a,
    {
        Self::Function(Box::new(function))
    }

    /// Produces the result for `payload`.
    #[inline]
    pub fn evaluate(self, payload: T) -> R {
        match self {
            Self::Constant(result) => result,
            Self::Function(function) => function(payload),
        }
    }
}

impl<T, R: fmt::Debug> fmt::Debug for Matcher<'_, T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(result) => formatter.debug_tuple("Constant").field(result).finish(),
            Self::Function(_) => formatter.write_str("Function(..)"),
        }
    }
}

/// A case for one variant of [`Optional`](super::Optional).
pub enum OptionalCase<'a, T, R> {
    /// Evaluated when the value is `Present`.
    Present(Matcher<'a, T, R>),
    /// Evaluated when the value is `Absent`.
    Absent(Thunk<'a, R>),
}

impl<'a, T, R> OptionalCase<'a, T, R> {
    /// A `Present` case computed from the payload.
    #[inline]
    pub fn present<F>(function: F) -> Self
    where
        F: FnOnce(T) -> R + 'a,
    {
        Self::Present(Matcher::from_fn(function))
    }

    /// A `Present` case that ignores the payload.
    #[inline]
    pub const fn present_value(result: R) -> Self {
        Self::Present(Matcher::Constant(result))
    }

    /// An `Absent` case producing a value or running a supplier.
    #[inline]
    pub fn absent(result: impl Into<Thunk<'a, R>>) -> Self {
        Self::Absent(result.into())
    }

    /// An `Absent` case computed by a supplier.
    #[inline]
    pub fn absent_with<F>(supplier: F) -> Self
    where
        F: FnOnce() -> R + 'a,
    {
        Self::Absent(Thunk::from_fn(supplier))
    }

    pub(crate) const fn variant_name(&self) -> &'static str {
        match self {
            Self::Present(_) => "Present",
            Self::Absent(_) => "Absent",
        }
    }
}

/// A case for one variant of [`Outcome`](super::Outcome).
pub enum OutcomeCase<'a, F, S, R> {
    /// Evaluated with the payload of a `Failure`.
    Failure(Matcher<'a, F, R>),
    /// Evaluated with the payload of a `Success`.
    Success(Matcher<'a, S, R>),
}

impl<'a, F, S, R> OutcomeCase<'a, F, S, R> {
    /// A `Failure` case computed from the failure payload.
    #[inline]
    pub fn failure<G>(function: G) -> Self
    where
        G: FnOnce(F) -> R + 'a,
    {
        Self::Failure(Matcher::from_fn(function))
    }

    /// A `Failure` case that ignores the payload.
    #[inline]
    pub const fn failure_value(result: R) -> Self {
        Self::Failure(Matcher::Constant(result))
    }

    /// A `Success` case computed from the success payload.
    #[inline]
    pub fn success<G>(function: G) -> Self
    where
        G: FnOnce(S) -> R + 'a,
    {
        Self::Success(Matcher::from_fn(function))
    }

    /// A `Success` case that ignores the payload.
    #[inline]
    pub const fn success_value(result: R) -> Self {
        Self::Success(Matcher::Constant(result))
    }

    pub(crate) const fn variant_name(&self) -> &'static str {
        match self {
            Self::Failure(_) => "Failure",
            Self::Success(_) => "Success",
        }
    }
}

/// Sorts the supplied cases into one slot per variant.
///
/// Fails if either slot stays empty or receives a second case. Both variants
/// are checked, not only the active one.
pub(crate) fn select<C>(
    cases: impl IntoIterator<Item = C>,
    is_first: impl Fn(&C) -> bool,
    variant_name: impl Fn(&C) -> &'static str,
    names: (&'static str, &'static str),
) -> crate::error::Result<(C, C)> {
    let mut first = None;
    let mut second = None;

    for case in cases {
        let slot = if is_first(&case) { &mut first } else { &mut second };
        if slot.is_some() {
            let variant = variant_name(&case);
            tracing::debug!(variant, "duplicate case in match_cases");
            return Err(crate::error::Error::DuplicateCaseForVariant { variant });
        }
        *slot = Some(case);
    }

    match (first, second) {
        (Some(first), Some(second)) => Ok((first, second)),
        (None, _) => {
            tracing::debug!(variant = names.0, "missing case in match_cases");
            Err(crate::error::Error::MissingCaseForVariant { variant: names.0 })
        }
        (_, None) => {
            tracing::debug!(variant = names.1, "missing case in match_cases");
            Err(crate::error::Error::MissingCaseForVariant { variant: names.1 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    fn present_first(case: &OptionalCase<'_, i32, i32>) -> bool {
        matches!(case, OptionalCase::Present(_))
    }

    #[rstest]
    fn test_matcher_constant_ignores_payload() {
        let matcher: Matcher<'_, i32, &str> = Matcher::Constant("fixed");
        assert_eq!(matcher.evaluate(10), "fixed");
    }

    #[rstest]
    fn test_matcher_function_receives_payload() {
        let matcher = Matcher::from_fn(|value: i32| value + 1);
        assert_eq!(matcher.evaluate(10), 11);
    }

    #[rstest]
    fn test_select_accepts_any_order() {
        let cases = [OptionalCase::absent(0), OptionalCase::present(|value: i32| value)];
        let selected = select(
            cases,
            present_first,
            OptionalCase::variant_name,
            ("Present", "Absent"),
        );
        let (present, absent) = selected.unwrap();
        assert_eq!(present.variant_name(), "Present");
        assert_eq!(absent.variant_name(), "Absent");
    }

    #[rstest]
    fn test_select_reports_missing_variant() {
        let cases = [OptionalCase::present(|value: i32| value)];
        let Err(error) = select(
            cases,
            present_first,
            OptionalCase::variant_name,
            ("Present", "Absent"),
        ) else {
            panic!("expected select to fail");
        };
        assert_eq!(error, Error::MissingCaseForVariant { variant: "Absent" });
    }

    #[rstest]
    fn test_select_reports_duplicate_variant() {
        let cases = [
            OptionalCase::absent(1),
            OptionalCase::present_value(2),
            OptionalCase::absent(3),
        ];
        let Err(error) = select(
            cases,
            present_first,
            OptionalCase::variant_name,
            ("Present", "Absent"),
        ) else {
            panic!("expected select to fail");
        };
        assert_eq!(error, Error::DuplicateCaseForVariant { variant: "Absent" });
    }

    #[rstest]
    fn test_outcome_case_names() {
        let failure: OutcomeCase<'_, &str, i32, i32> = OutcomeCase::failure_value(0);
        let success: OutcomeCase<'_, &str, i32, i32> = OutcomeCase::success(|value| value);
        assert_eq!(failure.variant_name(), "Failure");
        assert_eq!(success.variant_name(), "Success");
    }
}
