//! Helper functions (combinators) used when handing user functions to the
//! wrappers and the sequence engine.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that ignores its input (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`negate`]: Inverts a predicate
//! - [`bind`], [`bind2`]: Fix leading arguments of a function

/// Returns the value unchanged.
///
/// Mapping `identity` over an `Optional` or a cursor leaves it unchanged.
///
/// # Examples
///
/// ```
/// use lambseq::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use lambseq::compose::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use lambseq::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Inverts a predicate over borrowed values.
///
/// Used by [`Sequence::separate`](crate::sequence::Sequence::separate), which
/// is `span` with the predicate negated.
///
/// # Examples
///
/// ```
/// use lambseq::compose::negate;
///
/// let mut is_odd = negate(|value: &i32| value % 2 == 0);
/// assert!(is_odd(&3));
/// assert!(!is_odd(&4));
/// ```
#[inline]
pub fn negate<A: ?Sized, P>(mut predicate: P) -> impl FnMut(&A) -> bool
where
    P: FnMut(&A) -> bool,
{
    move |value: &A| !predicate(value)
}

/// Fixes the first argument of a binary function.
///
/// The bound argument precedes the argument supplied later, which is how
/// `Optional::map_with` hands the wrapped value to the function last.
///
/// # Examples
///
/// ```
/// use lambseq::compose::bind;
///
/// let prefix = bind(|prefix: &str, name: String| format!("{prefix}{name}"), "Dr. ");
/// assert_eq!(prefix("Who".to_string()), "Dr. Who");
/// ```
#[inline]
pub fn bind<A, B, C, F>(function: F, first: A) -> impl FnOnce(B) -> C
where
    F: FnOnce(A, B) -> C,
{
    move |last| function(first, last)
}

/// Fixes the first two arguments of a ternary function.
///
/// # Examples
///
/// ```
/// use lambseq::compose::bind2;
///
/// let add = bind2(|first: i32, second: i32, third: i32| first + second + third, 1, 2);
/// assert_eq!(add(5), 8);
/// ```
#[inline]
pub fn bind2<A, B, C, D, F>(function: F, first: A, second: B) -> impl FnOnce(C) -> D
where
    F: FnOnce(A, B, C) -> D,
{
    move |last| function(first, second, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[rstest]
    fn test_flip_twice_is_original() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        assert_eq!(flipped_power(3, 2), 8);

        let restored = flip(flipped_power);
        assert_eq!(restored(2, 3), power(2, 3));
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-3, true)]
    fn test_negate_inverts_predicate(#[case] value: i32, #[case] expected: bool) {
        let mut is_odd = negate(|number: &i32| number % 2 == 0);
        assert_eq!(is_odd(&value), expected);
    }

    #[rstest]
    fn test_negate_works_on_unsized_values() {
        let mut is_not_empty = negate(str::is_empty);
        assert!(is_not_empty("text"));
        assert!(!is_not_empty(""));
    }

    #[rstest]
    fn test_bind_puts_bound_argument_first() {
        let subtract_from_ten = bind(|minuend: i32, subtrahend: i32| minuend - subtrahend, 10);
        assert_eq!(subtract_from_ten(3), 7);
    }

    #[rstest]
    fn test_bind2_keeps_argument_order() {
        let join = bind2(
            |first: &str, second: &str, third: &str| format!("{first}{second}{third}"),
            "a",
            "b",
        );
        assert_eq!(join("c"), "abc");
    }
}
