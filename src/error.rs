//! Error types for contract violations.
//!
//! Every error in this crate is a misuse of the API that is detected at the
//! call that performs it. None of them is transient: retrying the same call
//! with the same arguments fails the same way.
//!
//! Most misuse is rejected by the type system instead (flattening a value that
//! is not nested, normalizing a scalar, writing through a view). The variants
//! below cover the paths where the shape of a value is only known at runtime.

/// Errors reported by `lambseq` operations.
///
/// # Examples
///
/// ```rust
/// use lambseq::error::Error;
///
/// let error = Error::MissingCaseForVariant { variant: "Absent" };
/// assert_eq!(format!("{error}"), "no case was supplied for the `Absent` variant");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A dynamically shaped input has no iteration strategy.
    #[error("cannot normalize a {kind} into a cursor")]
    UnsupportedSourceKind {
        /// The kind of value that was rejected, e.g. `"number"`.
        kind: &'static str,
    },

    /// `flatten_any` was called on a `Present` whose payload is not an `Optional`.
    #[error("the Present payload is not an Optional of the requested type")]
    NotNestedOptional,

    /// `flatten_any` was called on a `Success` whose payload is not an `Outcome`.
    #[error("the Success payload is not an Outcome of the requested type")]
    NotNestedResult,

    /// `match_cases` was called without a case for one of the variants.
    #[error("no case was supplied for the `{variant}` variant")]
    MissingCaseForVariant {
        /// The variant that has no case.
        variant: &'static str,
    },

    /// `match_cases` was called with more than one case for a variant.
    #[error("more than one case was supplied for the `{variant}` variant")]
    DuplicateCaseForVariant {
        /// The variant that has several cases.
        variant: &'static str,
    },

    /// A write or delete was attempted through a read-only indexed view.
    #[error("{operation} is not supported: indexed views are read-only")]
    ImmutableMutationAttempt {
        /// The rejected operation, `"set"` or `"remove"`.
        operation: &'static str,
    },
}

/// A `Result` specialized to [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::UnsupportedSourceKind { kind: "number" }, "cannot normalize a number into a cursor")]
    #[case(Error::NotNestedOptional, "the Present payload is not an Optional of the requested type")]
    #[case(Error::NotNestedResult, "the Success payload is not an Outcome of the requested type")]
    #[case(Error::MissingCaseForVariant { variant: "Present" }, "no case was supplied for the `Present` variant")]
    #[case(Error::DuplicateCaseForVariant { variant: "Failure" }, "more than one case was supplied for the `Failure` variant")]
    #[case(Error::ImmutableMutationAttempt { operation: "set" }, "set is not supported: indexed views are read-only")]
    fn test_error_display(#[case] error: Error, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_error_equality() {
        let first = Error::MissingCaseForVariant { variant: "Absent" };
        let second = Error::MissingCaseForVariant { variant: "Absent" };
        let third = Error::MissingCaseForVariant { variant: "Present" };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    #[rstest]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&Error::NotNestedOptional);
    }
}
