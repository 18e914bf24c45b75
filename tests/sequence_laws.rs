//! Property-based tests for the sequence engine.
//!
//! These properties hold for every finite source:
//!
//! - `count` agrees with the number of collected entries
//! - `reverse` twice is the identity
//! - `head` is absent exactly when the source is empty
//! - `uncons` leaves the same rest as `tail`
//! - `map(identity)` and `filter(|_| true)` change nothing

use lambseq::compose::identity;
use lambseq::control::Optional;
use lambseq::sequence::{normalize, Sequence};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_count_matches_collected_length(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let counted = normalize(values.clone()).count();
        prop_assert_eq!(counted, normalize(values).collect_entries().len());
    }

    #[test]
    fn prop_double_reverse_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let twice = normalize(values.clone()).reverse().reverse().collect_entries();
        prop_assert_eq!(twice, normalize(values).collect_entries());
    }

    #[test]
    fn prop_head_absent_iff_empty(values in prop::collection::vec(any::<u8>(), 0..8)) {
        let head = normalize(values.clone()).head();
        prop_assert_eq!(head.is_absent(), normalize(values.clone()).is_empty());
        prop_assert_eq!(head, Optional::from(values.first().copied()));
    }

    #[test]
    fn prop_uncons_rest_matches_tail(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let uncons = normalize(values.clone()).uncons();
        prop_assert_eq!(uncons.is_absent(), values.is_empty());
        if let Optional::Present((head, rest)) = uncons {
            prop_assert_eq!(head, values[0]);
            prop_assert_eq!(rest.collect_entries(), normalize(values).tail().collect_entries());
        }
    }

    #[test]
    fn prop_map_identity(text in "\\PC{0,24}") {
        let mapped = normalize(text.as_str()).map(identity).collect_entries();
        prop_assert_eq!(mapped, normalize(text.as_str()).collect_entries());
    }

    #[test]
    fn prop_filter_true(values in prop::collection::vec(any::<i64>(), 0..64)) {
        let filtered = normalize(values.clone()).filter(|_| true).collect_values();
        prop_assert_eq!(filtered, values);
    }

    #[test]
    fn prop_take_and_drop_cover_source(values in prop::collection::vec(any::<i32>(), 0..32), count in 0_usize..40) {
        let mut rejoined = normalize(values.clone()).take(count).collect_entries();
        rejoined.extend(normalize(values.clone()).drop(count).collect_entries());
        prop_assert_eq!(rejoined, normalize(values).collect_entries());
    }

    #[test]
    fn prop_span_matches_take_while_and_drop_while(values in prop::collection::vec(0_i32..10, 0..32)) {
        let (prefix, rest) = normalize(values.clone()).span(|value| *value < 5);
        prop_assert_eq!(
            prefix.collect_entries(),
            normalize(values.clone()).take_while(|value| *value < 5).collect_entries()
        );
        prop_assert_eq!(
            rest.collect_entries(),
            normalize(values).drop_while(|value| *value < 5).collect_entries()
        );
    }

    #[test]
    fn prop_partition_preserves_every_entry(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let (even, odd) = normalize(values.clone()).partition(|value| value % 2 == 0);
        let mut merged = odd.collect_entries();
        merged.extend(even.collect_entries());
        merged.sort_unstable();
        prop_assert_eq!(merged, normalize(values).collect_entries());
    }

    #[test]
    fn prop_group_concat_is_identity(text in "[ab]{0,24}") {
        let regrouped: String = normalize(text.as_str()).group().concat().values().collect();
        prop_assert_eq!(regrouped, text);
    }

    #[test]
    fn prop_sort_matches_std(mut values in prop::collection::vec(any::<i16>(), 0..64)) {
        let sorted = normalize(values.clone()).sort().collect_values();
        values.sort();
        prop_assert_eq!(sorted, values);
    }

    #[test]
    fn prop_maximum_matches_std(values in prop::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(normalize(values.clone()).maximum(), Optional::from(values.iter().copied().max()));
    }
}
