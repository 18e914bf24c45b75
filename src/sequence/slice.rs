//! Prefix and suffix adapters: `take`, `drop`, `take_while` and `drop_while`.
//!
//! The two-sided forms (`split_at`, `span`, `separate`) live in
//! [`fork`](super::fork), since both halves share one upstream.

use super::cursor::Cursor;

/// At most the first `remaining` entries.
///
/// Nothing is pulled once the count is used up.
#[derive(Debug, Clone)]
pub struct Take<C> {
    upstream: C,
    remaining: usize,
}

impl<C> Take<C> {
    pub(crate) const fn new(upstream: C, remaining: usize) -> Self {
        Self {
            upstream,
            remaining,
        }
    }
}

impl<C: Cursor> Cursor for Take<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.pull() {
            Some(entry) => {
                self.remaining -= 1;
                Some(entry)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

/// Everything after the first `pending` entries.
#[derive(Debug, Clone)]
pub struct Skip<C> {
    upstream: C,
    pending: usize,
}

impl<C> Skip<C> {
    pub(crate) const fn new(upstream: C, pending: usize) -> Self {
        Self { upstream, pending }
    }
}

impl<C: Cursor> Cursor for Skip<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        while self.pending > 0 {
            self.pending -= 1;
            self.upstream.pull()?;
        }
        self.upstream.pull()
    }
}

/// The longest prefix whose values satisfy a predicate.
///
/// The first failing value ends the sequence and is not yielded; nothing
/// after it is pulled.
#[derive(Debug, Clone)]
pub struct TakeWhile<C, P> {
    upstream: C,
    predicate: P,
    done: bool,
}

impl<C, P> TakeWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            done: false,
        }
    }
}

impl<C, P> Cursor for TakeWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if self.done {
            return None;
        }
        match self.upstream.pull() {
            Some((key, value)) if (self.predicate)(&value) => Some((key, value)),
            _ => {
                self.done = true;
                None
            }
        }
    }
}

/// Everything from the first value that fails a predicate onwards, keys
/// unchanged.
#[derive(Debug, Clone)]
pub struct DropWhile<C, P> {
    upstream: C,
    predicate: P,
    dropping: bool,
}

impl<C, P> DropWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            dropping: true,
        }
    }
}

impl<C, P> Cursor for DropWhile<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if self.dropping {
            self.dropping = false;
            loop {
                let (key, value) = self.upstream.pull()?;
                if !(self.predicate)(&value) {
                    return Some((key, value));
                }
            }
        }
        self.upstream.pull()
    }
}
