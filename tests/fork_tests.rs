//! Tests for the two-branch operations: partition, span, separate, split_at and unzip.

use lambseq::sequence::{Cursor, Route, Sequence, Splitter, fork, from_values, iterate, normalize};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Independence of the branches
// =============================================================================

#[rstest]
fn partition_branches_can_be_consumed_in_any_order() {
    let (left_first, right_second) = normalize(vec![1, 2, 3, 4]).partition(|value| value % 2 == 0);
    assert_eq!(left_first.collect_values(), vec![2, 4]);
    assert_eq!(right_second.collect_values(), vec![1, 3]);

    let (left_second, right_first) = normalize(vec![1, 2, 3, 4]).partition(|value| value % 2 == 0);
    assert_eq!(right_first.collect_values(), vec![1, 3]);
    assert_eq!(left_second.collect_values(), vec![2, 4]);
}

#[rstest]
fn partition_over_infinite_source_is_lazy() {
    let (multiples, _others) = iterate(1_u32, |value| value + 1).partition(|value| value % 5 == 0);
    assert_eq!(multiples.take(3).collect_values(), vec![5, 10, 15]);
}

#[rstest]
fn branches_pull_upstream_only_on_demand() {
    let pulled = Cell::new(0);
    let source = from_values((0..10).inspect(|_| pulled.set(pulled.get() + 1)));
    let (mut front, _back) = source.split_at(3);
    assert_eq!(pulled.get(), 0);
    assert_eq!(front.pull(), Some((0, 0)));
    assert_eq!(pulled.get(), 1);
}

#[rstest]
fn separate_over_text() {
    let (word, rest) = normalize("hello world").separate(|character| *character == ' ');
    assert_eq!(word.collect_values().into_iter().collect::<String>(), "hello");
    assert_eq!(rest.collect_values().into_iter().collect::<String>(), " world");
}

#[rstest]
fn unzip_of_zip_gives_back_the_inputs() {
    let (numbers, letters) = normalize(vec![1, 2, 3]).zip("abc").unzip();
    assert_eq!(numbers.collect_values(), vec![1, 2, 3]);
    assert_eq!(letters.collect_values(), vec!['a', 'b', 'c']);
}

// =============================================================================
// Custom splitters
// =============================================================================

struct EveryOther {
    next_left: bool,
}

impl Splitter<usize, char> for EveryOther {
    type Left = (usize, char);
    type Right = (usize, char);

    fn route(&mut self, key: usize, value: char) -> Route<(usize, char), (usize, char)> {
        self.next_left = !self.next_left;
        if self.next_left {
            Route::Left((key, value))
        } else {
            Route::Right((key, value))
        }
    }
}

#[rstest]
fn custom_splitter_alternates_branches() {
    let (even_keys, odd_keys) = fork(normalize("abcde"), EveryOther { next_left: false });
    assert_eq!(odd_keys.collect_entries(), vec![(1, 'b'), (3, 'd')]);
    assert_eq!(even_keys.collect_entries(), vec![(0, 'a'), (2, 'c'), (4, 'e')]);
}

#[rstest]
fn custom_splitter_routes_without_a_fork() {
    let mut splitter = EveryOther { next_left: true };
    assert_eq!(splitter.route(0, 'x'), Route::Right((0, 'x')));
    assert_eq!(splitter.route(1, 'y'), Route::Left((1, 'y')));
    assert!(splitter.left_open());
}
