//! Optional type - a value that may be absent.
//!
//! This module provides `Optional<T>`, which is either `Present(T)` or
//! `Absent`. It is the return type of every sequence operation that may have
//! nothing to report (`head`, `find`, `fold1`, ...) and the signal that ends
//! an `unfold`.
//!
//! `Absent` is a unit variant: there is one immutable absent value per payload
//! type, and producing it never allocates. Every combinator returns a new
//! value; nothing is mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Optional;
//!
//! let present = Optional::present(3);
//! assert_eq!(present.map(|value| value * 2), Optional::present(6));
//!
//! let absent: Optional<i32> = Optional::absent();
//! assert_eq!(absent.map(|value| value * 2), Optional::absent());
//!
//! // Extra arguments precede the wrapped value
//! let sum = Optional::present(5).map_with2(1, 2, |first, second, value| first + second + value);
//! assert_eq!(sum, Optional::present(8));
//! ```

use std::any::Any;

use super::case::{self, OptionalCase};
use super::thunk::Thunk;
use crate::compose::{bind, bind2};
use crate::error::{Error, Result};

/// A value that is either present or absent.
///
/// # Type Parameters
///
/// * `T` - The type of the present value
///
/// # Examples
///
/// ```rust
/// use lambseq::control::Optional;
///
/// let name = Optional::present("Ada");
/// assert_eq!(name.get_or_else("anonymous"), "Ada");
///
/// let missing: Optional<&str> = Optional::ABSENT;
/// assert_eq!(missing.get_or_else("anonymous"), "anonymous");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Optional<T> {
    /// A value is present.
    Present(T),
    /// No value.
    #[default]
    Absent,
}

static_assertions::assert_impl_all!(Optional<i32>: Copy, Send, Sync);

impl<T> Optional<T> {
    /// The absent value.
    pub const ABSENT: Self = Self::Absent;

    // =========================================================================
    // Construction and Inspection
    // =========================================================================

    /// Wraps a present value.
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the present value.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Returns `true` if a value is present and satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    ///
    /// assert!(Optional::present(4).exists(|value| value % 2 == 0));
    /// assert!(!Optional::<i32>::absent().exists(|_| true));
    /// ```
    #[inline]
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => predicate(value),
            Self::Absent => false,
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the present value, or evaluates `fallback`.
    ///
    /// A supplier fallback is not called when a value is present.
    ///
    /// # Type inference
    ///
    /// A [`Thunk`] argument needs the payload type already known, from a
    /// binding or a turbofish. With both types open, `Thunk<'_, T>` converts
    /// into itself as well as wrapping as a value, so the call is ambiguous.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::{Optional, Thunk};
    ///
    /// assert_eq!(Optional::present(100).get_or_else(0), 100);
    /// assert_eq!(Optional::<i32>::absent().get_or_else(Thunk::from_fn(|| 0)), 0);
    /// ```
    #[inline]
    pub fn get_or_else<'a>(self, fallback: impl Into<Thunk<'a, T>>) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback.into().evaluate(),
        }
    }

    /// Returns `self` if present, otherwise evaluates `alternative`.
    ///
    /// # Type inference
    ///
    /// As with [`get_or_else`](Self::get_or_else), a [`Thunk`] argument needs
    /// the payload type already known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::{Optional, Thunk};
    ///
    /// assert_eq!(Optional::present(100).or_else(Optional::present(99)), Optional::present(100));
    /// assert_eq!(Optional::absent().or_else(Optional::present(99)), Optional::present(99));
    /// assert_eq!(
    ///     Optional::<i32>::absent().or_else(Thunk::from_fn(Optional::absent)),
    ///     Optional::absent()
    /// );
    /// ```
    #[inline]
    pub fn or_else<'a>(self, alternative: impl Into<Thunk<'a, Self>>) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative.into().evaluate(),
        }
    }

    /// Calls `function` with the present value; does nothing when absent.
    #[inline]
    pub fn each<F>(self, function: F)
    where
        F: FnOnce(T),
    {
        if let Self::Present(value) = self {
            function(value);
        }
    }

    /// Eliminates the optional: `on_present(value)`, or the evaluated `on_absent`.
    ///
    /// # Type inference
    ///
    /// A [`Thunk`] passed as `on_absent` needs `R` fixed elsewhere, usually
    /// by the return type of `on_present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    ///
    /// assert_eq!(Optional::present("test").fold(String::from("none"), str::to_uppercase), "TEST");
    /// assert_eq!(Optional::<&str>::absent().fold(String::from("none"), str::to_uppercase), "none");
    /// ```
    #[inline]
    pub fn fold<'a, R, F>(self, on_absent: impl Into<Thunk<'a, R>>, on_present: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent.into().evaluate(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies `function` to the present value and wraps the result.
    ///
    /// Panics raised by `function` propagate to the caller.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Optional::Present(function(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Like [`map`](Self::map), calling `function(first, value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    ///
    /// let scaled = Optional::present(3).map_with(10, |factor, value| factor * value);
    /// assert_eq!(scaled, Optional::present(30));
    /// ```
    #[inline]
    pub fn map_with<A, U, F>(self, first: A, function: F) -> Optional<U>
    where
        F: FnOnce(A, T) -> U,
    {
        self.map(bind(function, first))
    }

    /// Like [`map`](Self::map), calling `function(first, second, value)`.
    #[inline]
    pub fn map_with2<A, B, U, F>(self, first: A, second: B, function: F) -> Optional<U>
    where
        F: FnOnce(A, B, T) -> U,
    {
        self.map(bind2(function, first, second))
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Maps with a function returning an optional and flattens the result.
    ///
    /// # Laws
    ///
    /// ```text
    /// Optional::present(x).flat_map(f) == f(x)
    /// m.flat_map(Optional::present) == m
    /// Optional::absent().flat_map(f) == Optional::absent()
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        self.map(function).flatten()
    }

    /// Like [`flat_map`](Self::flat_map), calling `function(first, value)`.
    #[inline]
    pub fn flat_map_with<A, U, F>(self, first: A, function: F) -> Optional<U>
    where
        F: FnOnce(A, T) -> Optional<U>,
    {
        self.map_with(first, function).flatten()
    }

    /// Like [`flat_map`](Self::flat_map), calling `function(first, second, value)`.
    #[inline]
    pub fn flat_map_with2<A, B, U, F>(self, first: A, second: B, function: F) -> Optional<U>
    where
        F: FnOnce(A, B, T) -> Optional<U>,
    {
        self.map_with2(first, second, function).flatten()
    }

    // =========================================================================
    // Pattern Matching
    // =========================================================================

    /// Evaluates the case of the active variant.
    ///
    /// `cases` may come in any order but must hold exactly one case for
    /// `Present` and one for `Absent`. Only the active case is evaluated.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingCaseForVariant`] if either variant has no case,
    ///   including the inactive one.
    /// - [`Error::DuplicateCaseForVariant`] if a variant has two cases.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::{Optional, OptionalCase};
    /// use lambseq::error::Error;
    ///
    /// let result = Optional::<i32>::absent().match_cases([
    ///     OptionalCase::present(|value: i32| value * 2),
    ///     OptionalCase::absent(3),
    /// ]);
    /// assert_eq!(result, Ok(3));
    ///
    /// let missing = Optional::present(1).match_cases([OptionalCase::present(|value: i32| value)]);
    /// assert_eq!(missing, Err(Error::MissingCaseForVariant { variant: "Absent" }));
    /// ```
    pub fn match_cases<'a, R>(
        self,
        cases: impl IntoIterator<Item = OptionalCase<'a, T, R>>,
    ) -> Result<R> {
        let (on_present, on_absent) = case::select(
            cases,
            |case| matches!(case, OptionalCase::Present(_)),
            OptionalCase::variant_name,
            ("Present", "Absent"),
        )?;

        match (self, on_present, on_absent) {
            (Self::Present(value), OptionalCase::Present(matcher), _) => Ok(matcher.evaluate(value)),
            (Self::Absent, _, OptionalCase::Absent(thunk)) => Ok(thunk.evaluate()),
            _ => unreachable!("select sorts cases by variant"),
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// `Present(Present(x))` becomes `Present(x)`; `Present(Absent)` and
    /// `Absent` become `Absent`. Flattening a value that is not nested does
    /// not compile.
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Present(inner) => inner,
            Self::Absent => Optional::Absent,
        }
    }
}

impl Optional<Box<dyn Any>> {
    /// Flattens a type-erased payload that should hold an `Optional<U>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotNestedOptional`] if the payload of a `Present` is
    /// not an `Optional<U>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::any::Any;
    /// use lambseq::control::Optional;
    /// use lambseq::error::Error;
    ///
    /// let nested: Optional<Box<dyn Any>> = Optional::present(Box::new(Optional::present(7_i32)));
    /// assert_eq!(nested.flatten_any::<i32>(), Ok(Optional::present(7)));
    ///
    /// let flat: Optional<Box<dyn Any>> = Optional::present(Box::new(7_i32));
    /// assert_eq!(flat.flatten_any::<i32>(), Err(Error::NotNestedOptional));
    /// ```
    pub fn flatten_any<U: 'static>(self) -> Result<Optional<U>> {
        match self {
            Self::Present(payload) => payload
                .downcast::<Optional<U>>()
                .map(|inner| *inner)
                .map_err(|_| {
                    tracing::debug!("flatten_any on a payload that is not an Optional");
                    Error::NotNestedOptional
                }),
            Self::Absent => Ok(Optional::Absent),
        }
    }
}

// =============================================================================
// Applicative Style
// =============================================================================

impl<F> Optional<F> {
    /// Applies the wrapped function to the value inside `other`.
    ///
    /// If either side is absent the result is absent. Chaining `ap` over
    /// curried functions applies a multi-argument function to several
    /// independent optionals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    ///
    /// let add = Optional::present(|first: i32| move |second: i32| first + second);
    /// let sum = add.ap(Optional::present(1)).ap(Optional::present(2));
    /// assert_eq!(sum, Optional::present(3));
    ///
    /// let partial = Optional::present(|value: i32| value + 1).ap(Optional::absent());
    /// assert_eq!(partial, Optional::absent());
    /// ```
    #[inline]
    pub fn ap<A, B>(self, other: Optional<A>) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.flat_map(|function| other.map(function))
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}
