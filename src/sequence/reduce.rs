//! Reductions and flattening.

use std::cmp::Ordering;

use super::cursor::{Cursor, IntoCursor};
use crate::control::Optional;

/// Flattens a cursor of sequences into one sequence with fresh keys.
pub struct Concat<C>
where
    C: Cursor,
    C::Value: IntoCursor,
{
    upstream: C,
    current: Option<<C::Value as IntoCursor>::IntoCursor>,
    position: usize,
    done: bool,
}

impl<C> Concat<C>
where
    C: Cursor,
    C::Value: IntoCursor,
{
    pub(crate) const fn new(upstream: C) -> Self {
        Self {
            upstream,
            current: None,
            position: 0,
            done: false,
        }
    }
}

impl<C> Cursor for Concat<C>
where
    C: Cursor,
    C::Value: IntoCursor,
{
    type Key = usize;
    type Value = <C::Value as IntoCursor>::Value;

    fn pull(&mut self) -> Option<(usize, Self::Value)> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some((_, value)) = inner.pull() {
                    let position = self.position;
                    self.position += 1;
                    return Some((position, value));
                }
                self.current = None;
            }
            if self.done {
                return None;
            }
            match self.upstream.pull() {
                Some((_, source)) => self.current = Some(source.into_cursor()),
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

/// Folds with the first value as the seed.
pub(crate) fn fold1<C, F>(mut cursor: C, mut function: F) -> Optional<C::Value>
where
    C: Cursor,
    F: FnMut(C::Value, C::Value) -> C::Value,
{
    let Some((_, mut accumulator)) = cursor.pull() else {
        return Optional::Absent;
    };
    while let Some((_, value)) = cursor.pull() {
        accumulator = function(accumulator, value);
    }
    Optional::Present(accumulator)
}

/// The extreme value in the direction of `wanted`.
///
/// A later value replaces the current one only if `compare(later, current)`
/// is exactly `wanted`, so the earliest of several equal values wins.
pub(crate) fn extremum<C, F>(cursor: C, wanted: Ordering, mut compare: F) -> Optional<C::Value>
where
    C: Cursor,
    F: FnMut(&C::Value, &C::Value) -> Ordering,
{
    fold1(cursor, |current, candidate| {
        if compare(&candidate, &current) == wanted {
            candidate
        } else {
            current
        }
    })
}
