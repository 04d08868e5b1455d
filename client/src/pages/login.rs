//! Login page: username and password against the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_app;
use crate::router::HOME_PATH;

/// Trim the username and require both fields. The password is sent as typed.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.loading) {
            return;
        }
        let (name, pass) = match validate_credentials(&username.get(), &password.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set("Signing in...".to_owned());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = ctx.session.login(&name, &pass).await;
            if outcome.success {
                info.set(String::new());
                navigate(HOME_PATH, NavigateOptions::default());
            } else {
                info.set(outcome.message.unwrap_or_else(|| "Login failed.".to_owned()));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Log in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || session.with(|s| s.loading)>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
