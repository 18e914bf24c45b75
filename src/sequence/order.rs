//! Eager ordering.

use std::cmp::Ordering;

use super::cursor::Cursor;
use super::source::ArrayCursor;

/// Drains `cursor` and returns its values sorted by `compare`, under fresh
/// keys. The sort is stable.
pub(crate) fn sort_by<C, F>(mut cursor: C, compare: F) -> ArrayCursor<usize, C::Value>
where
    C: Cursor,
    F: FnMut(&C::Value, &C::Value) -> Ordering,
{
    let mut values = Vec::new();
    while let Some((_, value)) = cursor.pull() {
        values.push(value);
    }
    values.sort_by(compare);
    tracing::trace!(values = values.len(), "sort materialized upstream");
    ArrayCursor::from_values(values)
}
