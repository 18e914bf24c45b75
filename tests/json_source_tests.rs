#![cfg(feature = "json")]

//! Tests for normalizing `serde_json::Value` input.

use lambseq::control::Optional;
use lambseq::error::Error;
use lambseq::sequence::{JsonKey, Sequence, normalize_json};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(json!(null), "null")]
#[case(json!(false), "boolean")]
#[case(json!(0), "number")]
fn scalar_sources_are_rejected(#[case] value: Value, #[case] kind: &'static str) {
    let error = normalize_json(value).unwrap_err();
    assert_eq!(error, Error::UnsupportedSourceKind { kind });
    assert_eq!(error.to_string(), format!("cannot normalize a {kind} into a cursor"));
}

#[rstest]
fn object_members_are_looked_up_by_name() {
    let person = json!({"name": "Grace", "languages": ["COBOL", "FLOW-MATIC"]});
    let languages = normalize_json(person)
        .unwrap()
        .lookup(&JsonKey::Name("languages".to_string()));
    assert_eq!(languages, Optional::present(json!(["COBOL", "FLOW-MATIC"])));
}

#[rstest]
fn nested_arrays_normalize_recursively() {
    let matrix = json!([[1, 2], [3], []]);
    let total: i64 = normalize_json(matrix)
        .unwrap()
        .values()
        .filter_map(|row| normalize_json(row).ok())
        .flat_map(|row| row.values())
        .filter_map(|cell| cell.as_i64())
        .sum();
    assert_eq!(total, 6);
}

#[rstest]
fn text_sources_compose_with_combinators() {
    let letters = normalize_json(json!("abba")).unwrap();
    let groups = letters.group().map(|group| group.len()).collect_values();
    assert_eq!(groups, vec![1, 2, 1]);
}
