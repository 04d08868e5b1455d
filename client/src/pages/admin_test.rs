use super::*;
use crate::test_support::scripted_client;
use futures::executor::block_on;
use serde_json::json;

fn post(id: i64, title: &str) -> Post {
    serde_json::from_value(json!({ "id": id, "title": title, "content": "" })).expect("post")
}

#[test]
fn uses_admin_listing_when_available() {
    let (api, transport) = scripted_client();
    transport.reply_json(200, json!({ "data": [{ "id": 7, "content": "hi", "author": "bob" }] }));

    let rows = block_on(admin_comments_or_fallback(&api, &[post(1, "One")])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].author_name.as_deref(), Some("bob"));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn missing_listing_falls_back_to_post_threads() {
    let (api, transport) = scripted_client();
    transport
        .reply_json(404, json!({ "error": "Not Found" }))
        .reply_json(200, json!([
            { "id": 10, "content": "top", "author": "a", "replies": [
                { "id": 11, "content": "reply", "author": "b", "parent_id": 10 }
            ] }
        ]))
        .reply_json(200, json!([]));

    let rows = block_on(admin_comments_or_fallback(&api, &[post(1, "One"), post(2, "Two")])).unwrap();

    let urls: Vec<String> = transport.sent().into_iter().map(|r| r.url).collect();
    assert_eq!(urls, vec!["/api/admin/comments", "/api/posts/1/comments", "/api/posts/2/comments"]);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 11]);
    assert_eq!(rows[1].post_title.as_deref(), Some("One"));
    assert_eq!(rows[1].post_id, Some(1));
}

#[test]
fn fallback_skips_posts_whose_thread_fails() {
    let (api, transport) = scripted_client();
    transport
        .reply_raw(404, "")
        .reply_json(500, json!({ "error": "boom" }))
        .reply_json(200, json!([{ "id": 20, "content": "ok" }]));

    let rows = block_on(admin_comments_or_fallback(&api, &[post(1, "One"), post(2, "Two")])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].post_title.as_deref(), Some("Two"));
}

#[test]
fn other_listing_errors_are_not_masked() {
    let (api, transport) = scripted_client();
    transport.reply_json(403, json!({ "message": "forbidden" }));

    let err = block_on(admin_comments_or_fallback(&api, &[post(1, "One")])).unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(transport.sent().len(), 1);
}
