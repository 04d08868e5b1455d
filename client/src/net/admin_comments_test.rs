use super::*;
use serde_json::json;

#[test]
fn data_field_is_extracted() {
    assert_eq!(extract(json!({ "data": [1, 2] })), vec![json!(1), json!(2)]);
}

#[test]
fn comments_field_is_extracted() {
    assert_eq!(extract(json!({ "comments": [1] })), vec![json!(1)]);
}

#[test]
fn results_field_is_extracted() {
    assert_eq!(extract(json!({ "results": [7, 8] })), vec![json!(7), json!(8)]);
}

#[test]
fn bare_array_is_returned_as_is() {
    assert_eq!(extract(json!([1, 2, 3])), vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn empty_object_yields_empty_list() {
    assert!(extract(json!({})).is_empty());
}

#[test]
fn scalar_payload_yields_empty_list() {
    assert!(extract(json!("nope")).is_empty());
    assert!(extract(json!(null)).is_empty());
}

#[test]
fn non_array_field_falls_through_to_next_strategy() {
    let payload = json!({ "data": { "nested": true }, "comments": [4] });
    assert_eq!(extract_with_strategy(payload), Some(("comments", vec![json!(4)])));
}

#[test]
fn data_wins_over_comments_when_both_present() {
    let payload = json!({ "data": [1], "comments": [2] });
    assert_eq!(extract_with_strategy(payload).map(|(name, _)| name), Some("data"));
}

#[test]
fn backend_paged_shape_uses_comments_strategy() {
    let payload = json!({ "comments": [{ "id": 1 }], "total": 1, "page": 1, "per_page": 20 });
    let (name, items) = extract_with_strategy(payload).unwrap();
    assert_eq!(name, "comments");
    assert_eq!(items.len(), 1);
}

#[test]
fn strategies_are_each_independently_applicable() {
    let names: Vec<_> = STRATEGIES.iter().map(|s| s.name).collect();
    assert_eq!(names, ["data", "comments", "results", "bare_array"]);
    for strategy in &STRATEGIES {
        assert!((strategy.apply)(json!({})).is_err(), "{} matched an empty object", strategy.name);
    }
}
