//! Helpers over threaded comment lists (top-level comments owning replies).

#[cfg(test)]
#[path = "comment_tree_test.rs"]
mod comment_tree_test;

use crate::net::types::Comment;

/// Depth-first, parent-before-reply walk of a comment forest.
#[must_use]
pub fn flatten(comments: &[Comment]) -> Vec<&Comment> {
    threaded(comments).into_iter().map(|(_, comment)| comment).collect()
}

/// `flatten`, paired with each comment's nesting depth (top level is 0).
#[must_use]
pub fn threaded(comments: &[Comment]) -> Vec<(usize, &Comment)> {
    let mut out = Vec::new();
    let mut stack: Vec<(usize, &Comment)> = comments.iter().rev().map(|c| (0, c)).collect();
    while let Some((depth, comment)) = stack.pop() {
        out.push((depth, comment));
        stack.extend(comment.replies.iter().rev().map(|reply| (depth + 1, reply)));
    }
    out
}

/// Total comments including nested replies.
#[must_use]
pub fn count(comments: &[Comment]) -> usize {
    comments.iter().map(|c| 1 + count(&c.replies)).sum()
}

/// Client-side mirror of the backend's comment length limit.
pub const MAX_COMMENT_CHARS: usize = 1000;

/// Trim and check a comment body before sending it.
///
/// # Errors
///
/// Returns a user-facing message when the body is empty or too long.
pub fn validate_comment(raw: &str) -> Result<String, &'static str> {
    let content = raw.trim();
    if content.is_empty() {
        return Err("Comment cannot be empty.");
    }
    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err("Comment cannot exceed 1000 characters.");
    }
    Ok(content.to_owned())
}
