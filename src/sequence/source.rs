//! Source normalization.
//!
//! Every input is classified into one of a closed set of cursor types when
//! the program is compiled:
//!
//! | Input | Cursor | Keys / values |
//! |---|---|---|
//! | `Vec<V>`, `[V; N]` | [`ArrayCursor<usize, V>`] | position, element |
//! | `BTreeMap<K, V>` | [`ArrayCursor<K, V>`] | map key, value |
//! | `String`, `&str` | [`TextCursor`] | code point index, `char` |
//! | any [`Cursor`] | itself | unchanged |
//! | iterator of pairs | [`Delegate`] | pair key, pair value |
//! | iterator of values | [`from_values`] | position, element |
//!
//! Normalization never consumes the input eagerly: text is decoded one code
//! point per pull and delegates advance only when pulled.

use std::borrow::Cow;
use std::collections::{BTreeMap, VecDeque};
use std::iter::{Enumerate, Fuse};

use super::cursor::{Cursor, IntoCursor};

/// Converts any supported input into its cursor.
///
/// # Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use lambseq::sequence::{normalize, Sequence};
///
/// assert_eq!(normalize(vec![10, 20]).collect_entries(), vec![(0, 10), (1, 20)]);
/// assert_eq!(normalize("añb").collect_entries(), vec![(0, 'a'), (1, 'ñ'), (2, 'b')]);
///
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(normalize(map).collect_entries(), vec![("a", 1), ("b", 2)]);
/// ```
#[inline]
pub fn normalize<S: IntoCursor>(source: S) -> S::IntoCursor {
    source.into_cursor()
}

/// Wraps a std iterator of plain values, keyed by position.
///
/// # Examples
///
/// ```rust
/// use lambseq::sequence::{from_values, Sequence};
///
/// let squares = from_values((1..).map(|n| n * n));
/// assert_eq!(squares.take(3).collect_entries(), vec![(0, 1), (1, 4), (2, 9)]);
/// ```
#[inline]
pub fn from_values<I: IntoIterator>(values: I) -> Delegate<Enumerate<I::IntoIter>> {
    Delegate::new(values.into_iter().enumerate())
}

// =============================================================================
// ArrayCursor
// =============================================================================

/// A cursor over entries that are already in memory.
///
/// Produced by normalizing a `Vec`, an array or a `BTreeMap`, and by the
/// eager operations (`sort`, `transpose`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayCursor<K, V> {
    entries: VecDeque<(K, V)>,
}

impl<K, V> ArrayCursor<K, V> {
    /// Builds a cursor over the given entries, keeping their keys and order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::sequence::{ArrayCursor, Sequence};
    ///
    /// let cursor = ArrayCursor::from_entries([("x", 1), ("y", 2)]);
    /// assert_eq!(cursor.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    /// ```
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub(crate) fn entry(&self, position: usize) -> Option<&(K, V)> {
        self.entries.get(position)
    }

    pub(crate) fn iter_values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub(crate) fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl<V> ArrayCursor<usize, V> {
    /// Builds a cursor over `values`, keyed by position.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::from_entries(values.into_iter().enumerate())
    }
}

impl<K, V> Default for ArrayCursor<K, V> {
    fn default() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }
}

impl<K, V> Cursor for ArrayCursor<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn pull(&mut self) -> Option<(K, V)> {
        self.entries.pop_front()
    }
}

impl<V> IntoCursor for Vec<V> {
    type Key = usize;
    type Value = V;
    type IntoCursor = ArrayCursor<usize, V>;

    fn into_cursor(self) -> Self::IntoCursor {
        ArrayCursor::from_values(self)
    }
}

impl<V, const N: usize> IntoCursor for [V; N] {
    type Key = usize;
    type Value = V;
    type IntoCursor = ArrayCursor<usize, V>;

    fn into_cursor(self) -> Self::IntoCursor {
        ArrayCursor::from_values(self)
    }
}

impl<K, V> IntoCursor for BTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type IntoCursor = ArrayCursor<K, V>;

    fn into_cursor(self) -> Self::IntoCursor {
        ArrayCursor::from_entries(self)
    }
}

// =============================================================================
// TextCursor
// =============================================================================

/// A cursor over the unicode code points of a string.
///
/// Keys count code points, not bytes.
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: Cow<'a, str>,
    offset: usize,
    index: usize,
}

impl<'a> TextCursor<'a> {
    /// Creates a cursor over borrowed or owned text.
    pub fn new(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            offset: 0,
            index: 0,
        }
    }
}

impl Cursor for TextCursor<'_> {
    type Key = usize;
    type Value = char;

    fn pull(&mut self) -> Option<(usize, char)> {
        let character = self.text[self.offset..].chars().next()?;
        self.offset += character.len_utf8();
        let index = self.index;
        self.index += 1;
        Some((index, character))
    }
}

impl IntoCursor for String {
    type Key = usize;
    type Value = char;
    type IntoCursor = TextCursor<'static>;

    fn into_cursor(self) -> Self::IntoCursor {
        TextCursor::new(self)
    }
}

impl<'a> IntoCursor for &'a str {
    type Key = usize;
    type Value = char;
    type IntoCursor = TextCursor<'a>;

    fn into_cursor(self) -> Self::IntoCursor {
        TextCursor::new(self)
    }
}

// =============================================================================
// Delegate
// =============================================================================

/// A cursor backed by a std iterator of `(key, value)` pairs.
///
/// The iterator is fused, so the cursor stays exhausted after its first
/// `None`.
#[derive(Debug, Clone)]
pub struct Delegate<I> {
    inner: Fuse<I>,
}

impl<I: Iterator> Delegate<I> {
    /// Wraps an iterator of pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::sequence::{Delegate, Sequence};
    ///
    /// let cursor = Delegate::new([("a", 1), ("b", 2)].into_iter());
    /// assert_eq!(cursor.lookup(&"b").get_or_else(0), 2);
    /// ```
    pub fn new(inner: I) -> Self {
        Self {
            inner: inner.fuse(),
        }
    }
}

impl<I, K, V> Cursor for Delegate<I>
where
    I: Iterator<Item = (K, V)>,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn pull(&mut self) -> Option<(K, V)> {
        self.inner.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Sequence;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case("", vec![])]
    #[case("abc", vec![(0, 'a'), (1, 'b'), (2, 'c')])]
    #[case("日本", vec![(0, '日'), (1, '本')])]
    #[case("e\u{301}", vec![(0, 'e'), (1, '\u{301}')])]
    fn test_text_cursor_yields_code_points(#[case] text: &str, #[case] expected: Vec<(usize, char)>) {
        assert_eq!(normalize(text).collect_entries(), expected);
    }

    #[rstest]
    fn test_owned_string_normalizes() {
        let cursor = normalize(String::from("hi"));
        assert_eq!(cursor.collect_values(), vec!['h', 'i']);
    }

    #[rstest]
    fn test_array_and_vec_normalize_with_positions() {
        assert_eq!(normalize([7, 8]).collect_entries(), vec![(0, 7), (1, 8)]);
        assert_eq!(normalize(Vec::<i32>::new()).collect_entries(), vec![]);
    }

    #[rstest]
    fn test_btree_map_keeps_keys_in_order() {
        let map = BTreeMap::from([(3, "three"), (1, "one"), (2, "two")]);
        assert_eq!(normalize(map).keys().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_delegate_pulls_lazily() {
        let produced = Cell::new(0);
        let mut cursor = from_values((0..).inspect(|_| produced.set(produced.get() + 1)));
        assert_eq!(produced.get(), 0);
        assert_eq!(cursor.pull(), Some((0, 0)));
        assert_eq!(produced.get(), 1);
    }

    #[rstest]
    fn test_existing_cursor_normalizes_to_itself() {
        let cursor = ArrayCursor::from_entries([("k", 1)]);
        let normalized: ArrayCursor<&str, i32> = normalize(cursor.clone());
        assert_eq!(normalized, cursor);
    }
}
