//! Bridges from cursors to std iterators.

use super::cursor::Cursor;

/// A std [`Iterator`] over a cursor's `(key, value)` pairs.
#[derive(Debug, Clone)]
pub struct Entries<C> {
    cursor: C,
}

impl<C> Entries<C> {
    pub(crate) const fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Iterator for Entries<C> {
    type Item = (C::Key, C::Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.pull()
    }
}

/// A std [`Iterator`] over a cursor's values.
#[derive(Debug, Clone)]
pub struct Values<C> {
    cursor: C,
}

impl<C> Values<C> {
    pub(crate) const fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Iterator for Values<C> {
    type Item = C::Value;

    #[inline]
    fn next(&mut self) -> Option<C::Value> {
        self.cursor.pull().map(|(_, value)| value)
    }
}

/// A std [`Iterator`] over a cursor's keys.
#[derive(Debug, Clone)]
pub struct Keys<C> {
    cursor: C,
}

impl<C> Keys<C> {
    pub(crate) const fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Iterator for Keys<C> {
    type Item = C::Key;

    #[inline]
    fn next(&mut self) -> Option<C::Key> {
        self.cursor.pull().map(|(key, _)| key)
    }
}
