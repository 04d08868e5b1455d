//! Top navigation bar: links, theme toggle, and the signed-in user.

use leptos::prelude::*;

use crate::app::use_app;
use crate::state::session::SessionState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let theme = ctx.theme.state();

    let on_logout = move |_| {
        leptos::task::spawn_local(async move {
            let outcome = ctx.session.logout().await;
            if !outcome.success {
                log::warn!("logout: {}", outcome.message.unwrap_or_default());
            }
        });
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"Blog"</a>
            <Show
                when=move || session.with(SessionState::is_logged_in)
                fallback=|| view! {
                    <a class="nav-bar__link" href="/login">"Log in"</a>
                    <a class="nav-bar__link" href="/register">"Register"</a>
                }
            >
                <a class="nav-bar__link" href="/write">"Write"</a>
                <a class="nav-bar__link" href="/my-posts">"My posts"</a>
                <Show when=move || session.with(SessionState::is_admin)>
                    <a class="nav-bar__link" href="/admin">"Admin"</a>
                </Show>
                <span class="nav-bar__user">
                    {move || {
                        session.with(|s| {
                            s.avatar().map(|src| view! { <img class="nav-bar__avatar" src=src.to_owned() alt=""/> })
                        })
                    }}
                    <span>{move || session.with(|s| s.username().to_owned())}</span>
                </span>
                <button class="nav-bar__button" on:click=on_logout>"Log out"</button>
            </Show>
            <button
                class="nav-bar__button nav-bar__theme"
                on:click=move |_| ctx.theme.toggle_theme()
                title="Toggle theme"
            >
                {move || if theme.get().is_dark_mode { "Light" } else { "Dark" }}
            </button>
        </nav>
    }
}
