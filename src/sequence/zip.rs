//! Lock-step combination of several cursors.
//!
//! A zip is as long as its shortest input. Inputs are pulled left to right;
//! as soon as one of them is exhausted the zip ends and none of the inputs is
//! pulled again.

use super::cursor::Cursor;

/// Pairs of values from two cursors.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    first: A,
    second: B,
    position: usize,
    done: bool,
}

impl<A, B> Zip<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            position: 0,
            done: false,
        }
    }
}

impl<A: Cursor, B: Cursor> Cursor for Zip<A, B> {
    type Key = usize;
    type Value = (A::Value, B::Value);

    fn pull(&mut self) -> Option<(usize, Self::Value)> {
        if self.done {
            return None;
        }
        let pair = self
            .first
            .pull()
            .and_then(|(_, left)| self.second.pull().map(|(_, right)| (left, right)));
        let Some(pair) = pair else {
            self.done = true;
            return None;
        };
        let position = self.position;
        self.position += 1;
        Some((position, pair))
    }
}

/// Triples of values from three cursors.
#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
    first: A,
    second: B,
    third: C,
    position: usize,
    done: bool,
}

impl<A, B, C> Zip3<A, B, C> {
    pub(crate) const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
            position: 0,
            done: false,
        }
    }
}

impl<A: Cursor, B: Cursor, C: Cursor> Cursor for Zip3<A, B, C> {
    type Key = usize;
    type Value = (A::Value, B::Value, C::Value);

    fn pull(&mut self) -> Option<(usize, Self::Value)> {
        if self.done {
            return None;
        }
        let triple = (|| {
            let (_, first) = self.first.pull()?;
            let (_, second) = self.second.pull()?;
            let (_, third) = self.third.pull()?;
            Some((first, second, third))
        })();
        let Some(triple) = triple else {
            self.done = true;
            return None;
        };
        let position = self.position;
        self.position += 1;
        Some((position, triple))
    }
}

/// Combines values from two cursors with a function.
#[derive(Debug, Clone)]
pub struct ZipWith<A, B, F> {
    inner: Zip<A, B>,
    function: F,
}

impl<A, B, F> ZipWith<A, B, F> {
    pub(crate) const fn new(first: A, second: B, function: F) -> Self {
        Self {
            inner: Zip::new(first, second),
            function,
        }
    }
}

impl<A, B, F, R> Cursor for ZipWith<A, B, F>
where
    A: Cursor,
    B: Cursor,
    F: FnMut(A::Value, B::Value) -> R,
{
    type Key = usize;
    type Value = R;

    fn pull(&mut self) -> Option<(usize, R)> {
        let (position, (first, second)) = self.inner.pull()?;
        Some((position, (self.function)(first, second)))
    }
}

/// Combines values from three cursors with a function.
#[derive(Debug, Clone)]
pub struct ZipWith3<A, B, C, F> {
    inner: Zip3<A, B, C>,
    function: F,
}

impl<A, B, C, F> ZipWith3<A, B, C, F> {
    pub(crate) const fn new(first: A, second: B, third: C, function: F) -> Self {
        Self {
            inner: Zip3::new(first, second, third),
            function,
        }
    }
}

impl<A, B, C, F, R> Cursor for ZipWith3<A, B, C, F>
where
    A: Cursor,
    B: Cursor,
    C: Cursor,
    F: FnMut(A::Value, B::Value, C::Value) -> R,
{
    type Key = usize;
    type Value = R;

    fn pull(&mut self) -> Option<(usize, R)> {
        let (position, (first, second, third)) = self.inner.pull()?;
        Some((position, (self.function)(first, second, third)))
    }
}
