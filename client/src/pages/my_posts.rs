//! The signed-in user's own posts, with edit/delete and avatar upload.

use leptos::prelude::*;

use crate::app::use_app;
use crate::components::avatar_upload::AvatarUpload;
use crate::components::post_card::PostCard;
use crate::net::types::Post;
use crate::util::confirm::confirm;

#[component]
pub fn MyPostsPage() -> impl IntoView {
    let ctx = use_app();
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match ctx.api.my_posts().await {
            Ok(list) => posts.set(list),
            Err(err) => error.set(Some(err.to_string())),
        }
        loading.set(false);
    });

    let on_delete = move |id: i64| {
        if !confirm("Delete this post?") {
            return;
        }
        leptos::task::spawn_local(async move {
            match ctx.api.delete_post(id).await {
                Ok(_) => posts.update(|list| list.retain(|post| post.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="my-posts-page">
            <header class="my-posts-page__header">
                <h1>{move || format!("{}'s posts", ctx.session.state().with(|s| s.username().to_owned()))}</h1>
                <AvatarUpload/>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading..."</p> }>
                <Show
                    when=move || posts.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="empty">"You have not written anything yet. " <a href="/write">"Write a post"</a></p> }
                >
                    <For
                        each=move || posts.get()
                        key=|post| post.id
                        children=move |post| {
                            let id = post.id;
                            view! {
                                <PostCard post=post>
                                    <a href=format!("/edit/{id}")>"Edit"</a>
                                    <button on:click=move |_| on_delete(id)>"Delete"</button>
                                </PostCard>
                            }
                        }
                    />
                </Show>
            </Show>
        </div>
    }
}
