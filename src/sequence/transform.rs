//! Element-wise transformations: `map`, `filter`, `reverse`, `intersperse`,
//! `intercalate` and `transpose`.

use super::cursor::{Cursor, IntoCursor};
use super::source::ArrayCursor;

/// Applies a function to every value, keeping keys.
#[derive(Debug, Clone)]
pub struct Map<C, F> {
    pub(crate) upstream: C,
    pub(crate) function: F,
}

impl<C, F> Map<C, F> {
    pub(crate) const fn new(upstream: C, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<C, F, U> Cursor for Map<C, F>
where
    C: Cursor,
    F: FnMut(C::Value) -> U,
{
    type Key = C::Key;
    type Value = U;

    #[inline]
    fn pull(&mut self) -> Option<(C::Key, U)> {
        let (key, value) = self.upstream.pull()?;
        Some((key, (self.function)(value)))
    }
}

/// Keeps the values that satisfy a predicate, with their keys.
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    pub(crate) upstream: C,
    pub(crate) predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    type Key = C::Key;
    type Value = C::Value;

    #[inline]
    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        loop {
            let (key, value) = self.upstream.pull()?;
            if (self.predicate)(&value) {
                return Some((key, value));
            }
        }
    }
}

/// Yields the upstream's entries last to first.
///
/// The upstream is drained into a buffer on the first pull.
pub struct Reverse<C: Cursor> {
    upstream: Option<C>,
    buffer: Vec<(C::Key, C::Value)>,
}

impl<C: Cursor> Reverse<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream: Some(upstream),
            buffer: Vec::new(),
        }
    }
}

impl<C: Cursor> Cursor for Reverse<C> {
    type Key = C::Key;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(C::Key, C::Value)> {
        if let Some(mut upstream) = self.upstream.take() {
            while let Some(entry) = upstream.pull() {
                self.buffer.push(entry);
            }
            tracing::trace!(entries = self.buffer.len(), "reverse materialized upstream");
        }
        self.buffer.pop()
    }
}

/// Places a separator between adjacent values.
pub struct Intersperse<C: Cursor> {
    upstream: C,
    separator: C::Value,
    queued: Option<C::Value>,
    started: bool,
    position: usize,
    done: bool,
}

impl<C: Cursor> Intersperse<C> {
    pub(crate) const fn new(upstream: C, separator: C::Value) -> Self {
        Self {
            upstream,
            separator,
            queued: None,
            started: false,
            position: 0,
            done: false,
        }
    }
}

impl<C> Cursor for Intersperse<C>
where
    C: Cursor,
    C::Value: Clone,
{
    type Key = usize;
    type Value = C::Value;

    fn pull(&mut self) -> Option<(usize, C::Value)> {
        let value = match self.queued.take() {
            Some(value) => value,
            None if self.done => return None,
            None => match self.upstream.pull() {
                None => {
                    self.done = true;
                    return None;
                }
                Some((_, value)) if self.started => {
                    self.queued = Some(value);
                    self.separator.clone()
                }
                Some((_, value)) => {
                    self.started = true;
                    value
                }
            },
        };
        let position = self.position;
        self.position += 1;
        Some((position, value))
    }
}

/// Flattens a cursor of sequences, inserting separator values between them.
pub struct Intercalate<C>
where
    C: Cursor,
    C::Value: IntoCursor,
{
    upstream: C,
    separator: Vec<<C::Value as IntoCursor>::Value>,
    separator_position: Option<usize>,
    current: Option<<C::Value as IntoCursor>::IntoCursor>,
    started: bool,
    position: usize,
    done: bool,
}

impl<C> Intercalate<C>
where
    C: Cursor,
    C::Value: IntoCursor,
{
    pub(crate) const fn new(upstream: C, separator: Vec<<C::Value as IntoCursor>::Value>) -> Self {
        Self {
            upstream,
            separator,
            separator_position: None,
            current: None,
            started: false,
            position: 0,
            done: false,
        }
    }

    fn emit(&mut self, value: <C::Value as IntoCursor>::Value) -> (usize, <C::Value as IntoCursor>::Value) {
        let position = self.position;
        self.position += 1;
        (position, value)
    }
}

impl<C, T> Cursor for Intercalate<C>
where
    C: Cursor,
    C::Value: IntoCursor<Value = T>,
    T: Clone,
{
    type Key = usize;
    type Value = T;

    fn pull(&mut self) -> Option<(usize, T)> {
        loop {
            if let Some(index) = self.separator_position {
                if let Some(value) = self.separator.get(index).cloned() {
                    self.separator_position = Some(index + 1);
                    return Some(self.emit(value));
                }
                self.separator_position = None;
            }
            if let Some(inner) = self.current.as_mut() {
                if let Some((_, value)) = inner.pull() {
                    return Some(self.emit(value));
                }
                self.current = None;
            }
            if self.done {
                return None;
            }
            let Some((_, source)) = self.upstream.pull() else {
                self.done = true;
                return None;
            };
            if self.started {
                self.separator_position = Some(0);
            }
            self.started = true;
            self.current = Some(source.into_cursor());
        }
    }
}

/// Turns rows into columns.
///
/// Column `n` holds the `n`-th value of every row that has one, so ragged
/// rows make later columns shorter instead of being padded.
pub(crate) fn transpose<C, T>(mut rows: C) -> ArrayCursor<usize, Vec<T>>
where
    C: Cursor,
    C::Value: IntoCursor<Value = T>,
{
    let mut columns: Vec<Vec<T>> = Vec::new();
    while let Some((_, row)) = rows.pull() {
        let mut row = row.into_cursor();
        let mut column = 0;
        while let Some((_, value)) = row.pull() {
            if column == columns.len() {
                columns.push(Vec::new());
            }
            columns[column].push(value);
            column += 1;
        }
    }
    tracing::trace!(columns = columns.len(), "transpose materialized rows");
    ArrayCursor::from_values(columns)
}
