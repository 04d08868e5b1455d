//! Admin dashboard: site stats plus post, user, and comment moderation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded by `requires_admin`. Older backends lack `GET /admin/comments`;
//! when it answers 404 the comment tab is assembled from every post's
//! comment thread instead.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::app::use_app;
use crate::net::api::{ApiClient, ApiError};
use crate::net::transport::Transport;
use crate::net::types::{AdminComment, AdminUser, Post, SiteStats};
use crate::util::comment_tree::flatten;
use crate::util::confirm::confirm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminTab {
    Posts,
    Users,
    Comments,
}

/// Admin comment rows, falling back to per-post threads when the listing
/// endpoint is missing.
///
/// A post whose thread fails to load is skipped with a warning.
///
/// # Errors
///
/// Any admin-listing failure other than a missing endpoint.
pub async fn admin_comments_or_fallback<T: Transport>(
    api: &ApiClient<T>,
    posts: &[Post],
) -> Result<Vec<AdminComment>, ApiError> {
    match api.admin_comments().await {
        Err(ApiError::AdminCommentsNotFound) => {}
        other => return other,
    }
    let mut rows = Vec::new();
    for post in posts {
        match api.comments(post.id).await {
            Ok(thread) => rows.extend(
                flatten(&thread)
                    .into_iter()
                    .map(|comment| AdminComment::from_post_comment(comment, post)),
            ),
            Err(err) => log::warn!("comments for post {} unavailable: {err}", post.id),
        }
    }
    log::debug!("assembled {} admin comments from {} posts", rows.len(), posts.len());
    Ok(rows)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let ctx = use_app();
    let tab = RwSignal::new(AdminTab::Posts);
    let stats = RwSignal::new(None::<SiteStats>);
    let posts = RwSignal::new(Vec::<Post>::new());
    let users = RwSignal::new(Vec::<AdminUser>::new());
    let comments = RwSignal::new(Vec::<AdminComment>::new());
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match ctx.api.stats().await {
            Ok(envelope) => stats.set(envelope.data),
            Err(err) => log::warn!("stats unavailable: {err}"),
        }
        match ctx.api.admin_users().await {
            Ok(list) => users.set(list),
            Err(err) => error.set(Some(err.to_string())),
        }
        let all_posts = match ctx.api.admin_posts().await {
            Ok(list) => list,
            Err(err) => {
                error.set(Some(err.to_string()));
                Vec::new()
            }
        };
        match admin_comments_or_fallback(&ctx.api, &all_posts).await {
            Ok(list) => comments.set(list),
            Err(err) => error.set(Some(err.to_string())),
        }
        posts.set(all_posts);
    });

    let delete_post = move |id: i64| {
        if !confirm("Delete this post?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.api.delete_post(id).await {
                Ok(_) => {
                    posts.update(|list| list.retain(|p| p.id != id));
                    comments.update(|list| list.retain(|c| c.post_id != Some(id)));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };
    let delete_user = move |id: i64| {
        if !confirm("Delete this user and all of their content?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.api.delete_user(id).await {
                Ok(_) => users.update(|list| list.retain(|u| u.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };
    let delete_comment = move |id: i64| {
        if !confirm("Delete this comment?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.api.delete_comment(id).await {
                Ok(_) => comments.update(|list| list.retain(|c| c.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let tab_button = move |target: AdminTab, label: &'static str| {
        view! {
            <button
                class="admin-tabs__tab"
                class:admin-tabs__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Admin"</h1>
            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <p class="admin-page__stats">
                                {format!(
                                    "{} posts · {} users · {} categories · {} comments",
                                    s.total_posts,
                                    s.total_users,
                                    s.total_categories,
                                    s.total_comments,
                                )}
                            </p>
                        }
                    })
            }}
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <nav class="admin-tabs">
                {tab_button(AdminTab::Posts, "Posts")}
                {tab_button(AdminTab::Users, "Users")}
                {tab_button(AdminTab::Comments, "Comments")}
            </nav>
            <Show when=move || tab.get() == AdminTab::Posts>
                <table class="admin-table">
                    <For
                        each=move || posts.get()
                        key=|p| p.id
                        children=move |p| {
                            let id = p.id;
                            view! {
                                <tr>
                                    <td><a href=format!("/post/{id}")>{p.title}</a></td>
                                    <td>{p.author.unwrap_or_default()}</td>
                                    <td>{p.created_at.unwrap_or_default()}</td>
                                    <td><button on:click=move |_| delete_post(id)>"Delete"</button></td>
                                </tr>
                            }
                        }
                    />
                </table>
            </Show>
            <Show when=move || tab.get() == AdminTab::Users>
                <table class="admin-table">
                    <For
                        each=move || users.get()
                        key=|u| u.id
                        children=move |u| {
                            let id = u.id;
                            view! {
                                <tr>
                                    <td>{u.username}</td>
                                    <td>{u.bio.unwrap_or_default()}</td>
                                    <td>{u.created_at.unwrap_or_default()}</td>
                                    <td><button on:click=move |_| delete_user(id)>"Delete"</button></td>
                                </tr>
                            }
                        }
                    />
                </table>
            </Show>
            <Show when=move || tab.get() == AdminTab::Comments>
                <table class="admin-table">
                    <For
                        each=move || comments.get()
                        key=|c| c.id
                        children=move |c| {
                            let id = c.id;
                            view! {
                                <tr>
                                    <td>{c.post_title.unwrap_or_default()}</td>
                                    <td>{c.author_name.unwrap_or_default()}</td>
                                    <td>{c.content}</td>
                                    <td><button on:click=move |_| delete_comment(id)>"Delete"</button></td>
                                </tr>
                            }
                        }
                    />
                </table>
            </Show>
        </div>
    }
}
