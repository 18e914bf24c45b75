//! Searching by value, key or predicate.

use super::cursor::Cursor;
use crate::control::Optional;

/// The first entry whose value satisfies `predicate`.
pub(crate) fn find_entry<C, P>(cursor: &mut C, mut predicate: P) -> Optional<(C::Key, C::Value)>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    while let Some((key, value)) = cursor.pull() {
        if predicate(&value) {
            return Optional::Present((key, value));
        }
    }
    Optional::Absent
}

/// The keys of the values that satisfy a predicate, under fresh positions.
#[derive(Debug, Clone)]
pub struct FindIndices<C, P> {
    upstream: C,
    predicate: P,
    position: usize,
}

impl<C, P> FindIndices<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
            position: 0,
        }
    }
}

impl<C, P> Cursor for FindIndices<C, P>
where
    C: Cursor,
    P: FnMut(&C::Value) -> bool,
{
    type Key = usize;
    type Value = C::Key;

    fn pull(&mut self) -> Option<(usize, C::Key)> {
        let (key, _) = find_entry(&mut self.upstream, &mut self.predicate).into_option()?;
        let position = self.position;
        self.position += 1;
        Some((position, key))
    }
}

#[cfg(test)]
mod tests {
    use crate::control::Optional;
    use crate::sequence::{normalize, Sequence};
    use rstest::rstest;
    use std::collections::BTreeMap;

    #[rstest]
    fn test_find_returns_first_match() {
        let found = normalize(vec![1, 4, 6]).find(|value| value % 2 == 0);
        assert_eq!(found, Optional::present(4));
    }

    #[rstest]
    #[case('s', true)]
    #[case('z', false)]
    fn test_elem_and_not_elem(#[case] needle: char, #[case] expected: bool) {
        assert_eq!(normalize("mississippi").elem(&needle), expected);
        assert_eq!(normalize("mississippi").not_elem(&needle), !expected);
    }

    #[rstest]
    fn test_lookup_by_key() {
        let ages = BTreeMap::from([("ada", 36), ("alan", 41)]);
        assert_eq!(normalize(ages.clone()).lookup(&"alan"), Optional::present(41));
        assert_eq!(normalize(ages).lookup(&"grace"), Optional::absent());
    }

    #[rstest]
    fn test_indexes_are_keys() {
        let letters = BTreeMap::from([('x', 10), ('y', 20), ('z', 10)]);
        assert_eq!(normalize(letters.clone()).elem_index(&10), Optional::present('x'));
        assert_eq!(normalize(letters.clone()).find_index(|value| *value > 15), Optional::present('y'));
        assert_eq!(normalize(letters).elem_indices(10).collect_values(), vec!['x', 'z']);
    }

    #[rstest]
    fn test_find_indices_is_lazy() {
        let mut evens = crate::sequence::iterate(0, |value| value + 1).find_indices(|value| value % 2 == 0);
        assert_eq!(crate::sequence::Cursor::pull(&mut evens), Some((0, 0)));
        assert_eq!(crate::sequence::Cursor::pull(&mut evens), Some((1, 2)));
    }
}
