//! The pull protocol shared by every source and adapter.
//!
//! A [`Cursor`] hands out `(key, value)` pairs one at a time. It is
//! single-pass: once [`Cursor::pull`] returns `None` the cursor is exhausted
//! and stays exhausted. Every source and stateful adapter in this crate keeps
//! that promise; [`Fuse`] adds it to a cursor written elsewhere.
//!
//! [`IntoCursor`] is the conversion used wherever an operation accepts
//! "something that can be pulled": a `Vec`, a `BTreeMap`, a string or any
//! cursor.

/// A single-pass, pull-based source of `(key, value)` pairs.
///
/// # Examples
///
/// ```rust
/// use lambseq::sequence::{normalize, Cursor};
///
/// let mut cursor = normalize(vec!['a', 'b']);
/// assert_eq!(cursor.pull(), Some((0, 'a')));
/// assert_eq!(cursor.pull(), Some((1, 'b')));
/// assert_eq!(cursor.pull(), None);
/// assert_eq!(cursor.pull(), None);
/// ```
pub trait Cursor {
    /// The key type of the pairs.
    type Key;
    /// The value type of the pairs.
    type Value;

    /// Advances the cursor and returns the next pair, or `None` when exhausted.
    fn pull(&mut self) -> Option<(Self::Key, Self::Value)>;
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Key = C::Key;
    type Value = C::Value;

    #[inline]
    fn pull(&mut self) -> Option<(Self::Key, Self::Value)> {
        (**self).pull()
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Key = C::Key;
    type Value = C::Value;

    #[inline]
    fn pull(&mut self) -> Option<(Self::Key, Self::Value)> {
        (**self).pull()
    }
}

/// Conversion into a [`Cursor`].
///
/// Implemented for every cursor (as itself) and for the built-in sources
/// listed in [`normalize`](super::normalize). Inputs without an
/// implementation are rejected at compile time.
pub trait IntoCursor {
    /// The key type of the resulting cursor.
    type Key;
    /// The value type of the resulting cursor.
    type Value;
    /// The resulting cursor.
    type IntoCursor: Cursor<Key = Self::Key, Value = Self::Value>;

    /// Converts `self` into a cursor without pulling anything.
    fn into_cursor(self) -> Self::IntoCursor;
}

impl<C: Cursor> IntoCursor for C {
    type Key = C::Key;
    type Value = C::Value;
    type IntoCursor = Self;

    #[inline]
    fn into_cursor(self) -> Self {
        self
    }
}

/// A cursor that stays exhausted after the first `None`.
///
/// Created by [`Sequence::fuse`](super::Sequence::fuse).
#[derive(Debug, Clone)]
pub struct Fuse<C> {
    upstream: C,
    done: bool,
}

impl<C> Fuse<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream,
            done: false,
        }
    }
}

impl<C: Cursor> Cursor for Fuse<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(Self::Key, Self::Value)> {
        if self.done {
            return None;
        }
        let entry = self.upstream.pull();
        self.done = entry.is_none();
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Produces `None` on every other pull, which a fused cursor must hide.
    struct Flickering {
        pulls: usize,
    }

    impl Cursor for Flickering {
        type Key = usize;
        type Value = usize;

        fn pull(&mut self) -> Option<(usize, usize)> {
            self.pulls += 1;
            (self.pulls % 2 == 0).then_some((self.pulls, self.pulls))
        }
    }

    #[rstest]
    fn test_fuse_is_terminal() {
        let mut fused = Fuse::new(Flickering { pulls: 0 });
        assert_eq!(fused.pull(), None);
        assert_eq!(fused.pull(), None);
        assert_eq!(fused.pull(), None);
    }

    #[rstest]
    fn test_mutable_reference_is_a_cursor() {
        let mut source = Flickering { pulls: 1 };
        let borrowed = &mut source;
        assert_eq!(borrowed.into_cursor().pull(), Some((2, 2)));
        assert_eq!(source.pulls, 2);
    }

    #[rstest]
    fn test_boxed_cursor_delegates() {
        let mut boxed: Box<dyn Cursor<Key = usize, Value = usize>> =
            Box::new(Flickering { pulls: 3 });
        assert_eq!(boxed.pull(), Some((4, 4)));
    }
}
