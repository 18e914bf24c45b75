//! Adapters for the ends of a sequence: `tail`, `init` and `peekable`.

use super::cursor::Cursor;
use crate::control::Optional;

/// Skips the first entry.
#[derive(Debug, Clone)]
pub struct Tail<C> {
    upstream: C,
    started: bool,
}

impl<C> Tail<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream,
            started: false,
        }
    }
}

impl<C: Cursor> Cursor for Tail<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if !self.started {
            self.started = true;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }
}

/// Drops the last entry, holding one entry of lookahead.
pub struct Init<C: Cursor> {
    upstream: C,
    pending: Option<(C::Key, C::Value)>,
    started: bool,
}

impl<C: Cursor> Init<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream,
            pending: None,
            started: false,
        }
    }
}

impl<C: Cursor> Cursor for Init<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if !self.started {
            self.started = true;
            self.pending = self.upstream.pull();
        }
        let current = self.pending.take()?;
        self.pending = Some(self.upstream.pull()?);
        Some(current)
    }
}

/// A cursor that can look at its next entry without consuming it.
pub struct Peekable<C: Cursor> {
    upstream: C,
    peeked: Option<Option<(C::Key, C::Value)>>,
}

impl<C: Cursor> Peekable<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream,
            peeked: None,
        }
    }

    fn fill(&mut self) -> Option<&(C::Key, C::Value)> {
        let upstream = &mut self.upstream;
        self.peeked.get_or_insert_with(|| upstream.pull()).as_ref()
    }

    /// The next value, without consuming it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambseq::control::Optional;
    /// use lambseq::sequence::{normalize, Cursor, Sequence};
    ///
    /// let mut cursor = normalize(vec![1, 2]).peekable();
    /// assert_eq!(cursor.peek(), Optional::present(&1));
    /// assert_eq!(cursor.pull(), Some((0, 1)));
    /// assert_eq!(cursor.peek_entry(), Optional::present(&(1, 2)));
    /// ```
    pub fn peek(&mut self) -> Optional<&C::Value> {
        self.fill().map(|(_, value)| value).into()
    }

    /// The next entry, without consuming it.
    pub fn peek_entry(&mut self) -> Optional<&(C::Key, C::Value)> {
        self.fill().into()
    }

    /// Returns `true` if the next pull will return `None`.
    pub fn is_exhausted(&mut self) -> bool {
        self.fill().is_none()
    }
}

impl<C: Cursor> Cursor for Peekable<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        match self.peeked.take() {
            Some(peeked) => {
                if peeked.is_none() {
                    self.peeked = Some(None);
                }
                peeked
            }
            None => self.upstream.pull(),
        }
    }
}
