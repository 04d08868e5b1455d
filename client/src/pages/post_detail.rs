//! Single post with its threaded comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached through `/post/:id`, which requires a session. The post and its
//! comments load independently; comment mutations re-fetch the whole thread
//! rather than patching it locally, since replies nest server-side.

#[cfg(test)]
#[path = "post_detail_test.rs"]
mod post_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::use_app;
use crate::components::post_card::byline;
use crate::net::types::{Comment, CommentDraft, Post};
use crate::state::session::SessionState;
use crate::util::comment_tree::{MAX_COMMENT_CHARS, count, threaded, validate_comment};
use crate::util::confirm::confirm;

/// Authors may delete their own comments; admins may delete any.
pub fn can_delete_comment(comment: &Comment, session: &SessionState) -> bool {
    session.is_admin()
        || (session.is_logged_in() && comment.author.as_deref() == Some(session.username()))
}

/// Tracked visibility of a comment's Delete action; follows later session
/// changes such as `check_auth` resolving after the thread has rendered.
pub fn delete_visible(
    session: RwSignal<SessionState>,
    comment: Comment,
) -> impl Fn() -> bool + Send + Sync + 'static {
    move || session.with(|state| can_delete_comment(&comment, state))
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let params = use_params_map();
    let post_id = Memo::new(move |_| params.read().get("id").and_then(|id| id.parse::<i64>().ok()));

    let post = RwSignal::new(None::<Post>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let error = RwSignal::new(None::<String>);
    let draft = RwSignal::new(String::new());
    let reply_to = RwSignal::new(None::<i64>);
    let posting = RwSignal::new(false);

    let load_comments = move |id: i64| {
        leptos::task::spawn_local(async move {
            match ctx.api.comments(id).await {
                Ok(list) => comments.set(list),
                Err(err) => log::warn!("comments for post {id} unavailable: {err}"),
            }
        });
    };

    Effect::new(move || {
        let Some(id) = post_id.get() else {
            error.set(Some("Unknown post.".to_owned()));
            return;
        };
        leptos::task::spawn_local(async move {
            match ctx.api.post_detail(id).await {
                Ok(found) => {
                    error.set(None);
                    post.set(Some(found));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
        load_comments(id);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = post_id.get_untracked() else {
            return;
        };
        if posting.get_untracked() {
            return;
        }
        let content = match validate_comment(&draft.get_untracked()) {
            Ok(content) => content,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        posting.set(true);
        let request = CommentDraft { content, parent_id: reply_to.get_untracked() };
        leptos::task::spawn_local(async move {
            match ctx.api.create_comment(id, &request).await {
                Ok(_) => {
                    draft.set(String::new());
                    reply_to.set(None);
                    error.set(None);
                    load_comments(id);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            posting.set(false);
        });
    };

    let on_delete = move |comment_id: i64| {
        if !confirm("Delete this comment?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.api.delete_comment(comment_id).await {
                Ok(_) => {
                    if let Some(id) = post_id.get_untracked() {
                        load_comments(id);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="post-detail-page">
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || {
                post.get()
                    .map(|post| {
                        let body = match post.content_html.clone() {
                            Some(html) => view! { <div class="post-detail__body" inner_html=html></div> }.into_any(),
                            None => view! { <div class="post-detail__body post-detail__body--plain">{post.content.clone()}</div> }.into_any(),
                        };
                        view! {
                            <article class="post-detail">
                                <h1>{post.title.clone()}</h1>
                                <p class="post-detail__byline">{byline(&post)}</p>
                                {body}
                            </article>
                        }
                    })
            }}
            <section class="comments">
                <h2>{move || format!("Comments ({})", comments.with(|list| count(list)))}</h2>
                {move || {
                    comments
                        .with(|list| {
                            threaded(list)
                                .into_iter()
                                .map(|(depth, comment)| {
                                    let id = comment.id;
                                    let deletable = delete_visible(session, comment.clone());
                                    view! {
                                        <div class="comment" style=format!("margin-left: {}rem", depth * 2)>
                                            <p class="comment__meta">
                                                {comment.author.clone().unwrap_or_else(|| "anonymous".to_owned())}
                                                " "
                                                {comment.created_at.clone().unwrap_or_default()}
                                            </p>
                                            <p class="comment__content">{comment.content.clone()}</p>
                                            <button class="comment__action" on:click=move |_| reply_to.set(Some(id))>
                                                "Reply"
                                            </button>
                                            <Show when=deletable>
                                                <button class="comment__action" on:click=move |_| on_delete(id)>
                                                    "Delete"
                                                </button>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect_view()
                        })
                }}
                <form class="comment-form" on:submit=on_submit>
                    <Show when=move || reply_to.get().is_some()>
                        <p class="comment-form__reply">
                            {move || format!("Replying to #{}", reply_to.get().unwrap_or_default())}
                            <button type="button" on:click=move |_| reply_to.set(None)>"Cancel"</button>
                        </p>
                    </Show>
                    <textarea
                        class="comment-form__input"
                        maxlength=MAX_COMMENT_CHARS.to_string()
                        placeholder="Write a comment"
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <span class="comment-form__count">
                        {move || format!("{}/{MAX_COMMENT_CHARS}", draft.with(|d| d.trim().chars().count()))}
                    </span>
                    <button type="submit" disabled=move || posting.get()>"Post comment"</button>
                </form>
            </section>
        </div>
    }
}
