//! Wire DTOs for the blog REST backend.
//!
//! DESIGN
//! ======
//! The backend is loose about optional columns, so most fields default when
//! absent instead of failing the whole decode. Field names follow the JSON
//! exactly; the session store maps `avatar_url` onto its own `avatar`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Default page size for the public post listing.
pub const DEFAULT_PER_PAGE: i64 = 7;

/// Generic `{success, message, data}` envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Envelope without a payload, returned by most mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /auth/login` and `POST /auth/register` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// User block inside a successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUser {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<LoginUser>,
}

/// `GET /auth/user` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// `data` block of a successful avatar upload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarData {
    pub avatar_url: String,
}

/// A blog post as listed or shown in detail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Rendered markdown excerpt (listings only).
    #[serde(default)]
    pub preview_html: Option<String>,
    /// Rendered markdown body (detail only).
    #[serde(default)]
    pub content_html: Option<String>,
}

/// Paging block of `GET /posts`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    #[serde(default)]
    pub has_prev: bool,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub prev_page: Option<i64>,
    #[serde(default)]
    pub next_page: Option<i64>,
}

/// `GET /posts` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Filter and paging for `GET /posts`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PostQuery {
    pub category_id: Option<i64>,
    pub page: i64,
    pub per_page: i64,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self { category_id: None, page: 1, per_page: DEFAULT_PER_PAGE }
    }
}

impl PostQuery {
    /// Query parameters in the order the backend documents them.
    #[must_use]
    pub fn params(&self) -> [(&'static str, Option<i64>); 3] {
        [
            ("category_id", self.category_id),
            ("page", Some(self.page).filter(|p| *p > 0)),
            ("per_page", Some(self.per_page).filter(|p| *p > 0)),
        ]
    }
}

/// Body for creating or updating a post.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

/// A post category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A comment with its nested replies, as returned for a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_avatar: Option<String>,
    pub content: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub replies: Vec<Comment>,
}

/// Body for creating or editing a comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

/// `POST /posts/:id/comments` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedComment {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub comment: Option<Comment>,
}

/// A comment row from the admin listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminComment {
    pub id: i64,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub post_title: Option<String>,
    #[serde(default, alias = "author")]
    pub author_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl AdminComment {
    /// Admin row for a per-post comment, used when the admin listing is missing.
    #[must_use]
    pub fn from_post_comment(comment: &Comment, post: &Post) -> Self {
        Self {
            id: comment.id,
            post_id: Some(post.id),
            post_title: Some(post.title.clone()),
            author_name: comment.author.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at.clone(),
        }
    }
}

/// A user row from the admin listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `data` block of `GET /stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteStats {
    #[serde(default)]
    pub total_posts: i64,
    #[serde(default)]
    pub total_users: i64,
    #[serde(default)]
    pub total_categories: i64,
    #[serde(default)]
    pub total_comments: i64,
    #[serde(default)]
    pub latest_posts: Vec<Post>,
}
