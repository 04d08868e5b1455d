use super::*;

fn post() -> Post {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "title": "Hello",
        "content": "body",
        "author": "alice",
        "category_name": "Rust",
        "created_at": "2024-05-01"
    }))
    .expect("post")
}

#[test]
fn byline_joins_present_parts() {
    assert_eq!(byline(&post()), "alice · Rust · 2024-05-01");
}

#[test]
fn byline_skips_missing_parts() {
    let mut post = post();
    post.category_name = None;
    post.author = Some(String::new());
    assert_eq!(byline(&post), "2024-05-01");
}

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  short  ", 10), "short");
}

#[test]
fn excerpt_cuts_on_char_boundary() {
    assert_eq!(excerpt("héllo wörld", 5), "héllo…");
    assert_eq!(excerpt("abcdef", 6), "abcdef");
}
