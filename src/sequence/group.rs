//! Runs of adjacent equal values.

use super::cursor::Cursor;

/// Groups consecutive values for which `equal(previous, next)` holds.
///
/// Only adjacency matters: equal values separated by a different one land in
/// different groups. Groups get fresh positional keys.
pub struct GroupBy<C: Cursor, E> {
    upstream: C,
    equal: E,
    pending: Option<C::Value>,
    position: usize,
    done: bool,
}

impl<C: Cursor, E> GroupBy<C, E> {
    pub(crate) const fn new(upstream: C, equal: E) -> Self {
        Self {
            upstream,
            equal,
            pending: None,
            position: 0,
            done: false,
        }
    }
}

impl<C, E> Cursor for GroupBy<C, E>
where
    C: Cursor,
    E: FnMut(&C::Value, &C::Value) -> bool,
{
    type Key = usize;
    type Value = Vec<C::Value>;

    fn pull(&mut self) -> Option<(usize, Vec<C::Value>)> {
        let first = match self.pending.take() {
            Some(value) => value,
            None if self.done => return None,
            None => match self.upstream.pull() {
                Some((_, value)) => value,
                None => {
                    self.done = true;
                    return None;
                }
            },
        };

        let mut group = vec![first];
        loop {
            let Some((_, value)) = self.upstream.pull() else {
                self.done = true;
                break;
            };
            let joins = group
                .last()
                .is_some_and(|previous| (self.equal)(previous, &value));
            if joins {
                group.push(value);
            } else {
                self.pending = Some(value);
                break;
            }
        }

        let position = self.position;
        self.position += 1;
        Some((position, group))
    }
}
