//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds the one API client and the two stores, hands them to every
//! view through `AppContext`, and binds each `router::ROUTES` entry to a page.
//! Theme and identity are restored once on mount.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RouteGuard;
use crate::net::api::{ApiClient, ApiConfig};
use crate::pages::{
    admin::AdminPage, home::HomePage, login::LoginPage, my_posts::MyPostsPage, post_detail::PostDetailPage,
    post_editor::PostEditorPage, register::RegisterPage,
};
use crate::router::{GuardMode, RouteName, pattern_segment};
use crate::state::session::SessionStore;
use crate::state::theme::ThemeStore;
use crate::util::storage::LocalStorage;

/// Everything a view needs: the API client, both stores, and the guard mode.
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub guard: GuardMode,
}

impl AppContext {
    /// Context wired to the browser with build-time configuration.
    #[must_use]
    pub fn from_build() -> Self {
        let api = ApiClient::browser(ApiConfig::from_build());
        Self {
            api,
            session: SessionStore::new(api),
            theme: ThemeStore::new(LocalStorage),
            guard: GuardMode::from_build(),
        }
    }
}

/// Route names bound in `App`, in binding order.
pub(crate) const BOUND_ROUTES: [RouteName; 8] = [
    RouteName::Home,
    RouteName::Login,
    RouteName::Register,
    RouteName::MyPosts,
    RouteName::PostDetail,
    RouteName::WritePost,
    RouteName::EditPost,
    RouteName::Admin,
];

fn head(name: RouteName) -> &'static str {
    pattern_segment(name, 0)
}

fn param(name: RouteName) -> &'static str {
    pattern_segment(name, 1).trim_start_matches(':')
}

/// Fetch the application context from inside a view.
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::from_build();
    provide_context(ctx);

    ctx.theme.init_theme();
    log::info!("api base {}, route guard {:?}", ctx.api.config().base_url, ctx.guard);
    leptos::task::spawn_local(async move {
        ctx.session.check_auth().await;
    });

    let theme = ctx.theme.state();

    view! {
        <Title text="Blog"/>

        <div id="app" class=move || theme.get().theme_class()>
            <Router>
                <NavBar/>
                <RouteGuard/>
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                        <Route path=StaticSegment(head(BOUND_ROUTES[0])) view=HomePage/>
                        <Route path=StaticSegment(head(BOUND_ROUTES[1])) view=LoginPage/>
                        <Route path=StaticSegment(head(BOUND_ROUTES[2])) view=RegisterPage/>
                        <Route path=StaticSegment(head(BOUND_ROUTES[3])) view=MyPostsPage/>
                        <Route
                            path=(StaticSegment(head(BOUND_ROUTES[4])), ParamSegment(param(BOUND_ROUTES[4])))
                            view=PostDetailPage
                        />
                        <Route path=StaticSegment(head(BOUND_ROUTES[5])) view=PostEditorPage/>
                        <Route
                            path=(StaticSegment(head(BOUND_ROUTES[6])), ParamSegment(param(BOUND_ROUTES[6])))
                            view=PostEditorPage
                        />
                        <Route path=StaticSegment(head(BOUND_ROUTES[7])) view=AdminPage/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
