//! Public landing page: paginated posts, category filter, site stats.

use leptos::prelude::*;

use crate::app::use_app;
use crate::components::post_card::PostCard;
use crate::net::types::{Category, PostPage, PostQuery, SiteStats};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app();
    let query = RwSignal::new(PostQuery::default());
    let listing = RwSignal::new(None::<PostPage>);
    let categories = RwSignal::new(Vec::<Category>::new());
    let stats = RwSignal::new(None::<SiteStats>);
    let error = RwSignal::new(None::<String>);

    leptos::task::spawn_local(async move {
        match ctx.api.categories().await {
            Ok(list) => categories.set(list),
            Err(err) => log::warn!("categories unavailable: {err}"),
        }
        match ctx.api.stats().await {
            Ok(envelope) => stats.set(envelope.data),
            Err(err) => log::warn!("stats unavailable: {err}"),
        }
    });

    Effect::new(move || {
        let current = query.get();
        leptos::task::spawn_local(async move {
            match ctx.api.posts(&current).await {
                Ok(page) => {
                    error.set(None);
                    listing.set(Some(page));
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    });

    let on_category = move |ev: leptos::ev::Event| {
        let category_id = event_target_value(&ev).parse().ok();
        query.set(PostQuery { category_id, ..PostQuery::default() });
    };
    let has_prev = move || listing.with(|l| l.as_ref().is_some_and(|l| l.pagination.has_prev));
    let has_next = move || listing.with(|l| l.as_ref().is_some_and(|l| l.pagination.has_next));

    view! {
        <div class="home-page">
            <section class="home-page__posts">
                <select class="home-page__filter" on:change=on_category>
                    <option value="">"All categories"</option>
                    <For
                        each=move || categories.get()
                        key=|category| category.id
                        children=move |category| {
                            view! { <option value=category.id.to_string()>{category.name}</option> }
                        }
                    />
                </select>
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    listing
                        .get()
                        .map(|page| {
                            if page.posts.is_empty() {
                                view! { <p class="empty">"No posts yet."</p> }.into_any()
                            } else {
                                page.posts
                                    .into_iter()
                                    .map(|post| view! { <PostCard post=post/> })
                                    .collect_view()
                                    .into_any()
                            }
                        })
                }}
                <nav class="pager">
                    <button
                        disabled=move || !has_prev()
                        on:click=move |_| query.update(|q| q.page = (q.page - 1).max(1))
                    >
                        "Newer"
                    </button>
                    <span class="pager__label">
                        {move || {
                            listing
                                .with(|l| l.as_ref().map(|l| (l.pagination.page, l.pagination.total_pages.max(1))))
                                .map(|(page, total)| format!("Page {page} of {total}"))
                        }}
                    </span>
                    <button disabled=move || !has_next() on:click=move |_| query.update(|q| q.page += 1)>
                        "Older"
                    </button>
                </nav>
            </section>
            <aside class="home-page__stats">
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <ul>
                                    <li>{format!("{} posts", s.total_posts)}</li>
                                    <li>{format!("{} users", s.total_users)}</li>
                                    <li>{format!("{} categories", s.total_categories)}</li>
                                    <li>{format!("{} comments", s.total_comments)}</li>
                                </ul>
                            }
                        })
                }}
            </aside>
        </div>
    }
}
