//! Registration page. A new account must still log in afterwards.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::use_app;
use crate::pages::login::validate_credentials;
use crate::router::LOGIN_PATH;

/// Credentials check plus a matching confirmation.
///
/// # Errors
///
/// Returns a user-facing message for a blank field or a mismatch.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String), &'static str> {
    let (username, password) = validate_credentials(username, password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((username, password))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.loading) {
            return;
        }
        let (name, pass) = match validate_registration(&username.get(), &password.get(), &confirm.get()) {
            Ok(fields) => fields,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set("Creating account...".to_owned());
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = ctx.session.register(&name, &pass).await;
            if outcome.success {
                navigate(LOGIN_PATH, NavigateOptions::default());
            } else {
                info.set(outcome.message.unwrap_or_else(|| "Registration failed.".to_owned()));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
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
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Confirm password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || session.with(|s| s.loading)>
                        "Create account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </div>
        </div>
    }
}
