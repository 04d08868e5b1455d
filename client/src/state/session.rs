//! Auth-session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the navigation policy and user-aware views. Session state is not
//! persisted client-side; `check_auth` re-derives it from the backend cookie
//! session on every page load.
//!
//! ERROR HANDLING
//! ==============
//! Every action is an error boundary: API failures become an
//! `ActionOutcome { success: false, message }` and never escape to the view.
//! Diagnostics go through the `log` facade, whose level is chosen once at
//! start-up.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::{ApiClient, ApiError};
use crate::net::transport::{AvatarFile, BrowserTransport, Transport};
use crate::net::types::{CurrentUser, LoginUser};

/// The signed-in user as the UI sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub username: String,
    pub is_admin: bool,
    /// Server field `avatar_url`.
    pub avatar: Option<String>,
}

impl From<LoginUser> for SessionUser {
    fn from(user: LoginUser) -> Self {
        Self { username: user.username, is_admin: user.is_admin, avatar: user.avatar_url }
    }
}

impl SessionUser {
    /// User from `GET /auth/user`, or `None` when the server says logged out.
    #[must_use]
    pub fn from_current(current: CurrentUser) -> Option<Self> {
        current.logged_in.then(|| Self {
            username: current.username.unwrap_or_default(),
            is_admin: current.is_admin,
            avatar: current.avatar_url,
        })
    }
}

/// Authentication state: anonymous when `user` is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    /// A login or registration request is in flight.
    pub loading: bool,
    /// `check_auth` has resolved at least once.
    pub checked: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Current username, empty when anonymous.
    #[must_use]
    pub fn username(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.username.as_str())
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.avatar.as_deref())
    }

    fn sign_in(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Result of a store action, shaped for direct display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl ActionOutcome {
    fn succeeded(message: Option<String>) -> Self {
        Self { success: true, message }
    }

    fn failed(message: Option<String>) -> Self {
        Self { success: false, message }
    }

    fn from_error(err: &ApiError) -> Self {
        Self::failed(Some(err.to_string()))
    }
}

/// Result of `upload_avatar`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvatarOutcome {
    pub success: bool,
    pub message: Option<String>,
    pub avatar_url: Option<String>,
}

/// Session signal plus the API client its actions call.
///
/// There is no locking: two overlapping actions both write the signal and the
/// later write wins.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<T = BrowserTransport> {
    state: RwSignal<SessionState>,
    api: ApiClient<T>,
}

impl<T: Transport> SessionStore<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), api }
    }

    /// Reactive handle for views and the route guard.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Untracked copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Sign in; on success the server's `avatar_url` becomes `avatar`.
    pub async fn login(&self, username: &str, password: &str) -> ActionOutcome {
        self.state.update(|s| s.loading = true);
        let outcome = match self.api.login(username, password).await {
            Ok(resp) if resp.success => match resp.user {
                Some(user) => {
                    log::debug!("login succeeded for {}", user.username);
                    self.state.update(|s| s.sign_in(user.into()));
                    ActionOutcome::succeeded(resp.message)
                }
                None => ActionOutcome::failed(Some("login response missing user".to_owned())),
            },
            Ok(resp) => ActionOutcome::failed(resp.message),
            Err(err) => ActionOutcome::from_error(&err),
        };
        self.state.update(|s| s.loading = false);
        outcome
    }

    /// Sign out. Local state is cleared whatever the server says.
    pub async fn logout(&self) -> ActionOutcome {
        let outcome = match self.api.logout().await {
            Ok(resp) => ActionOutcome::succeeded(resp.message),
            Err(err) => {
                log::warn!("logout request failed, clearing local session anyway: {err}");
                ActionOutcome::from_error(&err)
            }
        };
        self.state.update(SessionState::sign_out);
        outcome
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, username: &str, password: &str) -> ActionOutcome {
        self.state.update(|s| s.loading = true);
        let outcome = match self.api.register(username, password).await {
            Ok(resp) => ActionOutcome { success: resp.success, message: resp.message },
            Err(err) => ActionOutcome::from_error(&err),
        };
        self.state.update(|s| s.loading = false);
        outcome
    }

    /// Re-derive the session from the backend; any failure means anonymous.
    pub async fn check_auth(&self) {
        let user = match self.api.current_user().await {
            Ok(current) => SessionUser::from_current(current),
            Err(err) => {
                log::error!("checkAuth failed: {err}");
                None
            }
        };
        self.state.update(|s| {
            match user {
                Some(user) => s.sign_in(user),
                None => s.sign_out(),
            }
            s.checked = true;
        });
    }

    /// Upload a new avatar; on success only the `avatar` field changes.
    pub async fn upload_avatar(&self, file: AvatarFile) -> AvatarOutcome {
        match self.api.upload_avatar(file).await {
            Ok(resp) if resp.success => {
                let avatar_url = resp.data.map(|data| data.avatar_url);
                if let Some(url) = &avatar_url {
                    self.state.update(|s| {
                        if let Some(user) = s.user.as_mut() {
                            user.avatar = Some(url.clone());
                        }
                    });
                }
                AvatarOutcome { success: true, message: resp.message, avatar_url }
            }
            Ok(resp) => AvatarOutcome { success: false, message: resp.message, avatar_url: None },
            Err(err) => {
                log::error!("avatar upload failed: {err}");
                AvatarOutcome { success: false, message: Some(err.to_string()), avatar_url: None }
            }
        }
    }
}
