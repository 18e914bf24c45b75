//! End-to-end scenarios combining the value wrappers with the sequence engine.

use lambseq::control::Optional;
use lambseq::sequence::{iterate, normalize, unfold, Cursor, Sequence};
use rstest::rstest;

fn plus3(first: i32, second: i32, third: i32) -> i32 {
    first + second + third
}

#[rstest]
fn scan_with_seed() {
    let running = normalize(vec![1, 2, 3, 4]).scan(1, |total, value| total + value);
    assert_eq!(running.collect_values(), vec![1, 2, 4, 7, 11]);
}

#[rstest]
fn take_while_and_drop_while_split_the_source() {
    let source = vec![1, 2, 3, 4, 5, 1, 2];

    let prefix = normalize(source.clone()).take_while(|value| *value < 3);
    assert_eq!(prefix.collect_values(), vec![1, 2]);

    let rest = normalize(source).drop_while(|value| *value < 3);
    assert_eq!(
        rest.collect_entries(),
        vec![(2, 3), (3, 4), (4, 5), (5, 1), (6, 2)]
    );
}

#[rstest]
fn group_by_equality_over_text() {
    let groups: Vec<String> = normalize("Mississippi")
        .group_by(|previous, next| previous == next)
        .values()
        .map(|group| group.into_iter().collect())
        .collect();
    assert_eq!(groups, vec!["M", "i", "ss", "i", "ss", "i", "pp", "i"]);
}

#[rstest]
fn unfold_until_absent() {
    let doubling = unfold(1, |state: i32| {
        if state > 10 {
            Optional::absent()
        } else {
            Optional::present((state, state * 2))
        }
    });
    assert_eq!(doubling.collect_values(), vec![1, 2, 4, 8]);
}

#[rstest]
fn zip_stops_at_the_shorter_input() {
    let zipped = normalize((0..=5).collect::<Vec<_>>()).zip((6..=9).collect::<Vec<_>>());
    assert_eq!(zipped.collect_values(), vec![(0, 6), (1, 7), (2, 8), (3, 9)]);
}

#[rstest]
fn map_with2_passes_leading_arguments() {
    assert_eq!(Optional::present(5).map_with2(1, 2, plus3), Optional::present(8));
}

#[rstest]
fn lookup_in_a_lazy_pipeline_stops_early() {
    let squares = iterate(0_u64, |value| value + 1).map(|value| value * value);
    let first_large = squares.find(|square| *square > 1_000);
    assert_eq!(first_large, Optional::present(1_024));
}

#[rstest]
fn optional_results_drive_the_pipeline() {
    let words = normalize(vec!["3", "x", "5", "7"]);
    let parsed = words
        .map(|word| Optional::from(word.parse::<i32>().ok()))
        .filter(|parsed| parsed.is_present())
        .map(|parsed| parsed.get_or_else(0));
    assert_eq!(parsed.sum::<i32>(), 15);
}

#[rstest]
fn peekable_cursor_in_a_manual_loop() {
    let mut cursor = normalize("aaab").peekable();
    let mut runs = Vec::new();
    while let Some((_, character)) = cursor.pull() {
        let mut length = 1;
        while cursor.peek() == Optional::present(&character) {
            cursor.pull();
            length += 1;
        }
        runs.push((character, length));
    }
    assert_eq!(runs, vec![('a', 3), ('b', 1)]);
}
