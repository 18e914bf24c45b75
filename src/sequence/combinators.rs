//! The [`Sequence`] extension trait.
//!
//! Every [`Cursor`] is a `Sequence`. Adapter methods take the cursor by value
//! and return a new cursor that owns it; to keep using a cursor after an
//! operation, lend it with `&mut cursor`.
//!
//! # Examples
//!
//! ```rust
//! use lambseq::control::Optional;
//! use lambseq::sequence::{normalize, Sequence};
//!
//! let mut words = normalize(vec!["alpha", "beta", "gamma", "delta"]);
//!
//! let lengths = (&mut words).take(2).map(str::len).collect_values();
//! assert_eq!(lengths, vec![5, 4]);
//!
//! // The borrowed cursor continues where `take` stopped
//! assert_eq!(words.head(), Optional::present("gamma"));
//! ```

use std::cmp::Ordering;
use std::iter::{Product, Sum};

use super::access::{Init, Peekable, Tail};
use super::cursor::{Cursor, Fuse, IntoCursor};
use super::fork::{self, Forked, Partition, SplitAt, Span, Unzip};
use super::generate::Cycle;
use super::group::GroupBy;
use super::materialize::{Entries, Keys, Values};
use super::order;
use super::reduce::{self, Concat};
use super::scan::{self, Scan};
use super::search::{self, FindIndices};
use super::slice::{DropWhile, Skip, Take, TakeWhile};
use super::source::ArrayCursor;
use super::transform::{self, Filter, Intercalate, Intersperse, Map, Reverse};
use super::zip::{Zip, Zip3, ZipWith, ZipWith3};
use crate::compose::negate;
use crate::control::Optional;

/// The cursor returned by [`Sequence::group`].
pub type Group<C> = GroupBy<C, fn(&<C as Cursor>::Value, &<C as Cursor>::Value) -> bool>;

/// List-processing combinators for every [`Cursor`].
///
/// Methods returning a cursor are lazy. Methods returning anything else
/// (`fold`, `count`, `collect_values`, ...) pull until they have an answer,
/// so they do not return on an infinite cursor unless they can stop early
/// (`head`, `any`, `find`, ...).
pub trait Sequence: Cursor + Sized {
    // =========================================================================
    // Access
    // =========================================================================

    /// The first value, or `Absent` if there is none.
    fn head(mut self) -> Optional<Self::Value> {
        self.pull().map(|(_, value)| value).into()
    }

    /// The last value, or `Absent` if there is none.
    fn last(self) -> Optional<Self::Value> {
        self.fold(Optional::Absent, |_, value| Optional::Present(value))
    }

    /// Everything but the first entry.
    fn tail(self) -> Tail<Self> {
        Tail::new(self)
    }

    /// Everything but the last entry.
    fn init(self) -> Init<Self> {
        Init::new(self)
    }

    /// The first value and the cursor positioned after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::sequence::{normalize, Sequence};
    ///
    /// let (first, rest) = normalize("abc").uncons().into_option().unwrap();
    /// assert_eq!(first, 'a');
    /// assert_eq!(rest.collect_entries(), vec![(1, 'b'), (2, 'c')]);
    /// ```
    fn uncons(mut self) -> Optional<(Self::Value, Self)> {
        match self.pull() {
            Some((_, value)) => Optional::Present((value, self)),
            None => Optional::Absent,
        }
    }

    /// Returns `true` if the cursor yields nothing. Pulls at most one entry.
    fn is_empty(mut self) -> bool {
        self.pull().is_none()
    }

    /// The number of entries.
    fn count(mut self) -> usize {
        let mut count = 0;
        while self.pull().is_some() {
            count += 1;
        }
        count
    }

    /// Allows looking at the next entry without consuming it.
    fn peekable(self) -> Peekable<Self> {
        Peekable::new(self)
    }

    /// Stays exhausted after the first `None`, even if `self` would not.
    fn fuse(self) -> Fuse<Self> {
        Fuse::new(self)
    }

    // =========================================================================
    // Transform
    // =========================================================================

    /// Applies `function` to every value.
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        F: FnMut(Self::Value) -> U,
    {
        Map::new(self, function)
    }

    /// Keeps the values that satisfy `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// The entries last to first. Drains `self` on the first pull.
    fn reverse(self) -> Reverse<Self> {
        Reverse::new(self)
    }

    /// Places `separator` between adjacent values.
    fn intersperse(self, separator: Self::Value) -> Intersperse<Self>
    where
        Self::Value: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Flattens a cursor of sequences with `separator` between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::sequence::{normalize, Sequence};
    ///
    /// let rows = normalize(vec![vec![1, 2], vec![3], vec![4, 5]]);
    /// assert_eq!(rows.intercalate([0, 0]).collect_values(), vec![1, 2, 0, 0, 3, 0, 0, 4, 5]);
    /// ```
    fn intercalate<S>(self, separator: S) -> Intercalate<Self>
    where
        Self::Value: IntoCursor,
        S: IntoIterator<Item = <Self::Value as IntoCursor>::Value>,
    {
        Intercalate::new(self, separator.into_iter().collect())
    }

    /// Rows to columns. Eager; ragged rows shorten later columns.
    fn transpose<T>(self) -> ArrayCursor<usize, Vec<T>>
    where
        Self::Value: IntoCursor<Value = T>,
    {
        transform::transpose(self)
    }

    // =========================================================================
    // Reduce
    // =========================================================================

    /// Left fold.
    fn fold<A, F>(mut self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, Self::Value) -> A,
    {
        let mut accumulator = initial;
        while let Some((_, value)) = self.pull() {
            accumulator = function(accumulator, value);
        }
        accumulator
    }

    /// Left fold seeded with the first value; `Absent` if empty.
    fn fold1<F>(self, function: F) -> Optional<Self::Value>
    where
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
    {
        reduce::fold1(self, function)
    }

    /// Flattens a cursor of sequences.
    fn concat(self) -> Concat<Self>
    where
        Self::Value: IntoCursor,
    {
        Concat::new(self)
    }

    /// Maps every value to a sequence and flattens the result.
    fn concat_map<S, F>(self, function: F) -> Concat<Map<Self, F>>
    where
        S: IntoCursor,
        F: FnMut(Self::Value) -> S,
    {
        Concat::new(Map::new(self, function))
    }

    /// Returns `true` at the first value satisfying `predicate`.
    fn any<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Value) -> bool,
    {
        while let Some((_, value)) = self.pull() {
            if predicate(value) {
                return true;
            }
        }
        false
    }

    /// Returns `false` at the first value failing `predicate`.
    fn all<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Value) -> bool,
    {
        while let Some((_, value)) = self.pull() {
            if !predicate(value) {
                return false;
            }
        }
        true
    }

    /// The sum of the values.
    fn sum<S>(self) -> S
    where
        S: Sum<Self::Value>,
    {
        self.values().sum()
    }

    /// The product of the values.
    fn product<P>(self) -> P
    where
        P: Product<Self::Value>,
    {
        self.values().product()
    }

    /// The greatest value; the first one if several are equal.
    fn maximum(self) -> Optional<Self::Value>
    where
        Self::Value: Ord,
    {
        self.maximum_by(Ord::cmp)
    }

    /// The greatest value under `compare`; the first one on ties.
    fn maximum_by<F>(self, compare: F) -> Optional<Self::Value>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        reduce::extremum(self, Ordering::Greater, compare)
    }

    /// The least value; the first one if several are equal.
    fn minimum(self) -> Optional<Self::Value>
    where
        Self::Value: Ord,
    {
        self.minimum_by(Ord::cmp)
    }

    /// The least value under `compare`; the first one on ties.
    fn minimum_by<F>(self, compare: F) -> Optional<Self::Value>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        reduce::extremum(self, Ordering::Less, compare)
    }

    // =========================================================================
    // Scan
    // =========================================================================

    /// The seed followed by every intermediate accumulator.
    fn scan<A, F>(self, seed: A, function: F) -> Scan<Self, A, F>
    where
        A: Clone,
        F: FnMut(A, Self::Value) -> A,
    {
        Scan::new(self, seed, function)
    }

    /// Like [`scan`](Sequence::scan), seeded with the first value.
    ///
    /// Pulls the first value immediately; `Absent` if there is none.
    fn scan1<F>(mut self, function: F) -> Optional<Scan<Self, Self::Value, F>>
    where
        Self::Value: Clone,
        F: FnMut(Self::Value, Self::Value) -> Self::Value,
    {
        match self.pull() {
            Some((_, first)) => Optional::Present(Scan::new(self, first, function)),
            None => Optional::Absent,
        }
    }

    /// Threads an accumulator through the values, collecting one output each.
    fn map_accum<A, B, F>(self, accumulator: A, function: F) -> (A, Vec<B>)
    where
        F: FnMut(A, Self::Value) -> (A, B),
    {
        scan::map_accum(self, accumulator, function)
    }

    /// Repeats the entries without end.
    fn cycle(self) -> Cycle<Self>
    where
        Self::Key: Clone,
        Self::Value: Clone,
    {
        Cycle::new(self)
    }

    // =========================================================================
    // Slice
    // =========================================================================

    /// At most the first `count` entries.
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }

    /// Everything after the first `count` entries.
    fn drop(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }

    /// `(take(count), drop(count))` over one upstream.
    fn split_at(self, count: usize) -> Forked<Self, SplitAt> {
        fork::split_at(self, count)
    }

    /// The longest prefix whose values satisfy `predicate`.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Everything from the first value failing `predicate`.
    fn drop_while<P>(self, predicate: P) -> DropWhile<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        DropWhile::new(self, predicate)
    }

    /// `(take_while(predicate), drop_while(predicate))` over one upstream.
    ///
    /// The predicate runs once per entry.
    fn span<P>(self, predicate: P) -> Forked<Self, Span<P>>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        fork::span(self, predicate)
    }

    /// [`span`](Sequence::span) with the predicate negated.
    fn separate<P>(self, predicate: P) -> Forked<Self, Span<impl FnMut(&Self::Value) -> bool>>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        fork::span(self, negate(predicate))
    }

    // =========================================================================
    // Group
    // =========================================================================

    /// Runs of adjacent equal values.
    fn group(self) -> Group<Self>
    where
        Self::Value: PartialEq,
    {
        GroupBy::new(self, <Self::Value as PartialEq>::eq as fn(&Self::Value, &Self::Value) -> bool)
    }

    /// Runs of adjacent values where `equal(previous, next)` holds.
    fn group_by<E>(self, equal: E) -> GroupBy<Self, E>
    where
        E: FnMut(&Self::Value, &Self::Value) -> bool,
    {
        GroupBy::new(self, equal)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// The first value satisfying `predicate`.
    fn find<P>(mut self, predicate: P) -> Optional<Self::Value>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        search::find_entry(&mut self, predicate).map(|(_, value)| value)
    }

    /// Returns `true` if some value equals `value`.
    fn elem(self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        self.any(|candidate| candidate == *value)
    }

    /// Returns `true` if no value equals `value`.
    fn not_elem(self, value: &Self::Value) -> bool
    where
        Self::Value: PartialEq,
    {
        !self.elem(value)
    }

    /// The value stored under `key`.
    fn lookup(mut self, key: &Self::Key) -> Optional<Self::Value>
    where
        Self::Key: PartialEq,
    {
        while let Some((candidate, value)) = self.pull() {
            if candidate == *key {
                return Optional::Present(value);
            }
        }
        Optional::Absent
    }

    /// The key of the first value equal to `value`.
    fn elem_index(self, value: &Self::Value) -> Optional<Self::Key>
    where
        Self::Value: PartialEq,
    {
        self.find_index(|candidate| candidate == value)
    }

    /// The key of the first value satisfying `predicate`.
    fn find_index<P>(mut self, predicate: P) -> Optional<Self::Key>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        search::find_entry(&mut self, predicate).map(|(key, _)| key)
    }

    /// The keys of every value equal to `value`.
    fn elem_indices(self, value: Self::Value) -> impl Cursor<Key = usize, Value = Self::Key>
    where
        Self::Value: PartialEq,
    {
        self.find_indices(move |candidate| *candidate == value)
    }

    /// The keys of every value satisfying `predicate`.
    fn find_indices<P>(self, predicate: P) -> FindIndices<Self, P>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        FindIndices::new(self, predicate)
    }

    /// `(values satisfying predicate, the rest)` over one upstream.
    fn partition<P>(self, predicate: P) -> Forked<Self, Partition<P>>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        fork::partition(self, predicate)
    }

    // =========================================================================
    // Zip
    // =========================================================================

    /// Pairs values with those of `other`.
    fn zip<O: IntoCursor>(self, other: O) -> Zip<Self, O::IntoCursor> {
        Zip::new(self, other.into_cursor())
    }

    /// Triples values with those of `second` and `third`.
    fn zip3<O, T>(self, second: O, third: T) -> Zip3<Self, O::IntoCursor, T::IntoCursor>
    where
        O: IntoCursor,
        T: IntoCursor,
    {
        Zip3::new(self, second.into_cursor(), third.into_cursor())
    }

    /// Combines values with those of `other`.
    fn zip_with<O, F, R>(self, other: O, function: F) -> ZipWith<Self, O::IntoCursor, F>
    where
        O: IntoCursor,
        F: FnMut(Self::Value, O::Value) -> R,
    {
        ZipWith::new(self, other.into_cursor(), function)
    }

    /// Combines values with those of `second` and `third`.
    fn zip_with3<O, T, F, R>(
        self,
        second: O,
        third: T,
        function: F,
    ) -> ZipWith3<Self, O::IntoCursor, T::IntoCursor, F>
    where
        O: IntoCursor,
        T: IntoCursor,
        F: FnMut(Self::Value, O::Value, T::Value) -> R,
    {
        ZipWith3::new(self, second.into_cursor(), third.into_cursor(), function)
    }

    /// Splits pair values into two cursors over one upstream.
    fn unzip<A, B>(self) -> Forked<Self, Unzip>
    where
        Self: Cursor<Value = (A, B)>,
    {
        fork::unzip(self)
    }

    // =========================================================================
    // Order
    // =========================================================================

    /// The values in ascending order. Eager and stable.
    fn sort(self) -> ArrayCursor<usize, Self::Value>
    where
        Self::Value: Ord,
    {
        order::sort_by(self, Ord::cmp)
    }

    /// The values ordered by `compare`. Eager and stable.
    fn sort_by<F>(self, compare: F) -> ArrayCursor<usize, Self::Value>
    where
        F: FnMut(&Self::Value, &Self::Value) -> Ordering,
    {
        order::sort_by(self, compare)
    }

    // =========================================================================
    // Materialize
    // =========================================================================

    /// Drains the values into a `Vec`.
    fn collect_values(self) -> Vec<Self::Value> {
        self.values().collect()
    }

    /// Drains the entries into a `Vec`.
    fn collect_entries(self) -> Vec<(Self::Key, Self::Value)> {
        self.entries().collect()
    }

    /// A std iterator over the entries.
    fn entries(self) -> Entries<Self> {
        Entries::new(self)
    }

    /// A std iterator over the values.
    fn values(self) -> Values<Self> {
        Values::new(self)
    }

    /// A std iterator over the keys.
    fn keys(self) -> Keys<Self> {
        Keys::new(self)
    }
}

impl<C: Cursor> Sequence for C {}
