use super::*;
use serde_json::json;

// =============================================================
// Auth payloads
// =============================================================

#[test]
fn login_response_decodes_user_block() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "success": true,
        "message": "登录成功",
        "user": { "username": "alice", "is_admin": false, "avatar_url": "/static/uploads/a.png" }
    }))
    .unwrap();
    assert!(resp.success);
    let user = resp.user.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.avatar_url.as_deref(), Some("/static/uploads/a.png"));
}

#[test]
fn current_user_defaults_to_logged_out() {
    let resp: CurrentUser = serde_json::from_value(json!({ "logged_in": false })).unwrap();
    assert_eq!(resp, CurrentUser::default());
}

#[test]
fn credentials_serialize_as_username_password() {
    let body = serde_json::to_value(Credentials { username: "bob", password: "pw" }).unwrap();
    assert_eq!(body, json!({ "username": "bob", "password": "pw" }));
}

#[test]
fn envelope_without_data_decodes() {
    let env: Envelope<AvatarData> = serde_json::from_value(json!({ "success": false, "message": "没有文件被上传" })).unwrap();
    assert!(!env.success);
    assert!(env.data.is_none());
}

// =============================================================
// Posts
// =============================================================

#[test]
fn post_page_decodes_listing_with_pagination() {
    let page: PostPage = serde_json::from_value(json!({
        "posts": [{
            "id": 3,
            "title": "Hello",
            "content": "body",
            "author": "alice",
            "author_avatar": null,
            "category_id": 1,
            "category_name": "Rust",
            "created_at": "2024-01-01 10:00:00",
            "preview_html": "<p>body</p>"
        }],
        "pagination": {
            "page": 1, "per_page": 7, "total": 1, "total_pages": 1,
            "has_prev": false, "has_next": false, "prev_page": null, "next_page": null
        }
    }))
    .unwrap();
    assert_eq!(page.posts.len(), 1);
    assert_eq!(page.posts[0].category_name.as_deref(), Some("Rust"));
    assert_eq!(page.pagination.total_pages, 1);
    assert!(!page.pagination.has_next);
}

#[test]
fn post_query_defaults_to_first_page_of_seven() {
    let query = PostQuery::default();
    assert_eq!(query.params(), [("category_id", None), ("page", Some(1)), ("per_page", Some(7))]);
}

#[test]
fn post_query_drops_non_positive_paging() {
    let query = PostQuery { category_id: Some(2), page: 0, per_page: 0 };
    assert_eq!(query.params(), [("category_id", Some(2)), ("page", None), ("per_page", None)]);
}

#[test]
fn post_draft_omits_missing_category() {
    let draft = PostDraft { title: "t".to_owned(), content: "c".to_owned(), category_id: None };
    assert_eq!(serde_json::to_value(&draft).unwrap(), json!({ "title": "t", "content": "c" }));
}

// =============================================================
// Comments
// =============================================================

#[test]
fn comment_tree_decodes_nested_replies() {
    let comments: Vec<Comment> = serde_json::from_value(json!([{
        "id": 1, "post_id": 9, "author": "a", "content": "top", "parent_id": null,
        "replies": [{ "id": 2, "post_id": 9, "author": "b", "content": "reply", "parent_id": 1, "replies": [] }]
    }]))
    .unwrap();
    assert_eq!(comments[0].replies[0].parent_id, Some(1));
}

#[test]
fn admin_comment_accepts_author_alias() {
    let row: AdminComment = serde_json::from_value(json!({ "id": 5, "author": "carol", "content": "hi" })).unwrap();
    assert_eq!(row.author_name.as_deref(), Some("carol"));
}

#[test]
fn admin_comment_from_post_comment_carries_post_title() {
    let post: Post = serde_json::from_value(json!({ "id": 4, "title": "Title" })).unwrap();
    let comment: Comment = serde_json::from_value(json!({ "id": 8, "author": "dan", "content": "yo" })).unwrap();
    let row = AdminComment::from_post_comment(&comment, &post);
    assert_eq!(row.post_id, Some(4));
    assert_eq!(row.post_title.as_deref(), Some("Title"));
    assert_eq!(row.author_name.as_deref(), Some("dan"));
}

#[test]
fn site_stats_tolerates_missing_counts() {
    let stats: Envelope<SiteStats> =
        serde_json::from_value(json!({ "success": true, "data": { "total_posts": 12 } })).unwrap();
    let data = stats.data.unwrap();
    assert_eq!(data.total_posts, 12);
    assert_eq!(data.total_users, 0);
    assert!(data.latest_posts.is_empty());
}
