//! Shared write/edit form for `/write` and `/edit/:id`.

#[cfg(test)]
#[path = "post_editor_test.rs"]
mod post_editor_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::use_app;
use crate::net::types::{Category, PostDraft};

/// Build a draft from raw form fields.
///
/// `category` is the `<select>` value; empty or non-numeric means none.
///
/// # Errors
///
/// Returns a user-facing message when the title or content is blank.
pub fn validate_post_draft(title: &str, content: &str, category: &str) -> Result<PostDraft, &'static str> {
    let title = title.trim();
    if title.is_empty() || content.trim().is_empty() {
        return Err("Title and content are required.");
    }
    Ok(PostDraft {
        title: title.to_owned(),
        content: content.to_owned(),
        category_id: category.trim().parse().ok(),
    })
}

#[component]
pub fn PostEditorPage() -> impl IntoView {
    let ctx = use_app();
    let navigate = use_navigate();
    let params = use_params_map();
    let editing = Memo::new(move |_| params.read().get("id").and_then(|id| id.parse::<i64>().ok()));

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let info = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    leptos::task::spawn_local(async move {
        match ctx.api.categories().await {
            Ok(list) => categories.set(list),
            Err(err) => log::warn!("categories unavailable: {err}"),
        }
    });

    Effect::new(move || {
        let Some(id) = editing.get() else {
            title.set(String::new());
            content.set(String::new());
            category.set(String::new());
            return;
        };
        leptos::task::spawn_local(async move {
            match ctx.api.post_detail(id).await {
                Ok(post) => {
                    title.set(post.title);
                    content.set(post.content);
                    category.set(post.category_id.map(|c| c.to_string()).unwrap_or_default());
                }
                Err(err) => info.set(err.to_string()),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let draft = match validate_post_draft(&title.get_untracked(), &content.get_untracked(), &category.get_untracked()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        saving.set(true);
        let target = editing.get_untracked();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(id) => ctx.api.update_post(id, &draft).await,
                None => ctx.api.create_post(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    let next = target.map_or_else(|| "/my-posts".to_owned(), |id| format!("/post/{id}"));
                    navigate(&next, NavigateOptions::default());
                }
                Err(err) => info.set(err.to_string()),
            }
        });
    };

    view! {
        <div class="post-editor-page">
            <h1>{move || if editing.get().is_some() { "Edit post" } else { "Write a post" }}</h1>
            <form class="post-editor" on:submit=on_submit>
                <input
                    class="post-editor__title"
                    type="text"
                    placeholder="Title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select
                    class="post-editor__category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"No category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.id
                        children=move |c| view! { <option value=c.id.to_string()>{c.name}</option> }
                    />
                </select>
                <textarea
                    class="post-editor__content"
                    placeholder="Write in Markdown"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || saving.get()>
                    {move || if editing.get().is_some() { "Save changes" } else { "Publish" }}
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="post-editor__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
