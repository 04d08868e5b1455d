use super::*;
use serde_json::json;

fn forest() -> Vec<Comment> {
    serde_json::from_value(json!([
        { "id": 1, "content": "a", "replies": [
            { "id": 2, "content": "a.1", "parent_id": 1, "replies": [
                { "id": 4, "content": "a.1.1", "parent_id": 2 }
            ] },
            { "id": 3, "content": "a.2", "parent_id": 1 }
        ] },
        { "id": 5, "content": "b" }
    ]))
    .unwrap()
}

#[test]
fn flatten_walks_parent_before_replies_in_order() {
    let ids: Vec<i64> = flatten(&forest()).iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 3, 5]);
}

#[test]
fn threaded_reports_depth() {
    let depths: Vec<(usize, i64)> = threaded(&forest()).iter().map(|(d, c)| (*d, c.id)).collect();
    assert_eq!(depths, vec![(0, 1), (1, 2), (2, 4), (1, 3), (0, 5)]);
}

#[test]
fn count_includes_nested_replies() {
    assert_eq!(count(&forest()), 5);
    assert_eq!(count(&[]), 0);
}

#[test]
fn validate_comment_trims_and_bounds_length() {
    assert_eq!(validate_comment("  hi  "), Ok("hi".to_owned()));
    assert_eq!(validate_comment("   "), Err("Comment cannot be empty."));
    assert!(validate_comment(&"字".repeat(MAX_COMMENT_CHARS)).is_ok());
    assert_eq!(
        validate_comment(&"x".repeat(MAX_COMMENT_CHARS + 1)),
        Err("Comment cannot exceed 1000 characters.")
    );
}
