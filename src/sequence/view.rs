//! Read-only positional access.
//!
//! An in-memory [`ArrayCursor`] (and a `map` or `filter` directly over one)
//! can answer "what is at position n" without being pulled. The view is
//! read-only: [`IndexedView::set`] and [`IndexedView::remove`] always fail.

use super::source::ArrayCursor;
use super::transform::{Filter, Map};
use crate::control::Optional;
use crate::error::{Error, Result};

/// Positional, read-only access to the entries a cursor has not yet produced.
///
/// Positions count from the next entry to be pulled. Reads take `&mut self`
/// so that views over `map` and `filter` can call the same `FnMut` closures
/// those adapters accept.
///
/// # Examples
///
/// ```rust
/// use lambseq::sequence::{normalize, IndexedView, Sequence};
/// use lambseq::control::Optional;
/// use lambseq::error::Error;
///
/// let mut evens = normalize(vec![1, 2, 3, 4, 6]).filter(|value| value % 2 == 0);
/// assert_eq!(evens.get(1), Optional::present(4));
/// assert_eq!(evens.len(), 3);
/// assert!(evens.contains(2));
/// assert!(!evens.contains(3));
///
/// assert_eq!(evens.set(0, 8), Err(Error::ImmutableMutationAttempt { operation: "set" }));
/// ```
pub trait IndexedView {
    /// The value type produced at each position.
    type Value;

    /// The value at `position`, or `Absent` past the end.
    fn get(&mut self, position: usize) -> Optional<Self::Value>;

    /// The number of positions.
    fn len(&mut self) -> usize;

    /// Returns `true` if there are no positions.
    fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `position` holds a value.
    fn contains(&mut self, position: usize) -> bool {
        position < self.len()
    }

    /// Always fails: views cannot be written.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ImmutableMutationAttempt`].
    fn set(&mut self, position: usize, value: Self::Value) -> Result<()> {
        let _ = value;
        tracing::debug!(position, "rejected set on a read-only view");
        Err(Error::ImmutableMutationAttempt { operation: "set" })
    }

    /// Always fails: views cannot be written.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::ImmutableMutationAttempt`].
    fn remove(&mut self, position: usize) -> Result<()> {
        tracing::debug!(position, "rejected remove on a read-only view");
        Err(Error::ImmutableMutationAttempt {
            operation: "remove",
        })
    }
}

impl<K, V: Clone> IndexedView for ArrayCursor<K, V> {
    type Value = V;

    fn get(&mut self, position: usize) -> Optional<V> {
        self.entry(position)
            .map(|(_, value)| value.clone())
            .into()
    }

    fn len(&mut self) -> usize {
        self.remaining()
    }
}

impl<K, V, U, F> IndexedView for Map<ArrayCursor<K, V>, F>
where
    V: Clone,
    F: FnMut(V) -> U,
{
    type Value = U;

    fn get(&mut self, position: usize) -> Optional<U> {
        self.upstream.get(position).map(&mut self.function)
    }

    fn len(&mut self) -> usize {
        self.upstream.remaining()
    }
}

impl<K, V, P> IndexedView for Filter<ArrayCursor<K, V>, P>
where
    V: Clone,
    P: FnMut(&V) -> bool,
{
    type Value = V;

    /// The `position`-th value that satisfies the predicate.
    fn get(&mut self, position: usize) -> Optional<V> {
        let predicate = &mut self.predicate;
        self.upstream
            .iter_values()
            .filter(|value| predicate(value))
            .nth(position)
            .cloned()
            .into()
    }

    fn len(&mut self) -> usize {
        let predicate = &mut self.predicate;
        self.upstream
            .iter_values()
            .filter(|value| predicate(value))
            .count()
    }
}
