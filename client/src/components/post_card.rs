//! Summary card for a post in a listing.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::Post;

/// Plain-text excerpt length used when the backend sent no preview.
const EXCERPT_CHARS: usize = 160;

/// A post title linking to its detail page, with byline and preview.
#[component]
pub fn PostCard(
    post: Post,
    /// Extra actions rendered in the card footer (edit/delete links).
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let href = format!("/post/{}", post.id);
    let byline = byline(&post);
    let preview = post.preview_html.clone();
    let excerpt = excerpt(&post.content, EXCERPT_CHARS);

    view! {
        <article class="post-card">
            <h2 class="post-card__title">
                <a href=href>{post.title}</a>
            </h2>
            <p class="post-card__byline">{byline}</p>
            {match preview {
                Some(html) => view! { <div class="post-card__preview" inner_html=html></div> }.into_any(),
                None => view! { <p class="post-card__preview">{excerpt}</p> }.into_any(),
            }}
            {children.map(|children| view! { <footer class="post-card__actions">{children()}</footer> })}
        </article>
    }
}

/// "author · category · date", skipping missing parts.
pub(crate) fn byline(post: &Post) -> String {
    [post.author.as_deref(), post.category_name.as_deref(), post.created_at.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ")
}

/// First `max_chars` characters of `text`, with an ellipsis when cut.
pub(crate) fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", text[..cut].trim_end()),
        None => text.to_owned(),
    }
}
