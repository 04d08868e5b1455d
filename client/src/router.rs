//! Static route table and navigation policy.
//!
//! DESIGN
//! ======
//! The table is the single source of truth for which paths exist and what
//! they require. `app` binds each entry to a view; the preview server uses
//! `match_route` to decide which unknown paths should get `index.html`.
//! `decide` is the navigation guard: a pure function of route metadata and
//! session state.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::state::session::SessionState;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    const AUTH: Self = Self { requires_auth: true, requires_admin: false };
    const ADMIN: Self = Self { requires_auth: true, requires_admin: true };
}

/// Named views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteName {
    Home,
    Login,
    Register,
    MyPosts,
    PostDetail,
    WritePost,
    EditPost,
    Admin,
}

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::MyPosts => "my-posts",
            Self::PostDetail => "post-detail",
            Self::WritePost => "write-post",
            Self::EditPost => "edit-post",
            Self::Admin => "admin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments match any single non-empty segment.
    pub path: &'static str,
    pub name: RouteName,
    pub meta: RouteMeta,
}

pub static ROUTES: [RouteEntry; 8] = [
    RouteEntry { path: "/", name: RouteName::Home, meta: RouteMeta::PUBLIC },
    RouteEntry { path: "/login", name: RouteName::Login, meta: RouteMeta::PUBLIC },
    RouteEntry { path: "/register", name: RouteName::Register, meta: RouteMeta::PUBLIC },
    RouteEntry { path: "/my-posts", name: RouteName::MyPosts, meta: RouteMeta::AUTH },
    RouteEntry { path: "/post/:id", name: RouteName::PostDetail, meta: RouteMeta::AUTH },
    RouteEntry { path: "/write", name: RouteName::WritePost, meta: RouteMeta::AUTH },
    RouteEntry { path: "/edit/:id", name: RouteName::EditPost, meta: RouteMeta::AUTH },
    RouteEntry { path: "/admin", name: RouteName::Admin, meta: RouteMeta::ADMIN },
];

/// Entry for a route name.
#[must_use]
pub fn route(name: RouteName) -> &'static RouteEntry {
    ROUTES
        .iter()
        .find(|entry| entry.name == name)
        .unwrap_or(&ROUTES[0])
}

/// Resolve a concrete path (query and fragment ignored) to its entry.
#[must_use]
pub fn match_route(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let wanted: Vec<&str> = segments(path).collect();
    ROUTES.iter().find(|entry| {
        let pattern: Vec<&str> = segments(entry.path).collect();
        pattern.len() == wanted.len()
            && pattern
                .iter()
                .zip(&wanted)
                .all(|(p, w)| p.starts_with(':') || p == w)
    })
}

/// Segment `index` of a route's pattern, `""` when absent.
#[must_use]
pub fn pattern_segment(name: RouteName, index: usize) -> &'static str {
    segments(route(name).path).nth(index).unwrap_or_default()
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Whether the guard acts on route metadata at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardMode {
    /// Redirect anonymous users and non-admins away from protected routes.
    Enforce,
    /// Always allow navigation.
    #[default]
    Permissive,
}

impl GuardMode {
    /// Compile-time selection: `BLOG_ROUTE_GUARD=enforce` turns enforcement on.
    #[must_use]
    pub fn from_build() -> Self {
        Self::parse(option_env!("BLOG_ROUTE_GUARD"))
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("enforce" | "on") => Self::Enforce,
            _ => Self::Permissive,
        }
    }
}

/// Outcome of the navigation guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    Redirect(&'static str),
}

/// Navigation policy for `route` given the current session.
///
/// Until `check_auth` has resolved the session is unknown and navigation is
/// allowed; the guard re-runs once it resolves.
#[must_use]
pub fn decide(route: &RouteEntry, session: &SessionState, mode: GuardMode) -> NavDecision {
    if mode == GuardMode::Permissive || !session.checked {
        return NavDecision::Allow;
    }
    if route.meta.requires_auth && !session.is_logged_in() {
        NavDecision::Redirect(LOGIN_PATH)
    } else if route.meta.requires_admin && !session.is_admin() {
        NavDecision::Redirect(HOME_PATH)
    } else {
        NavDecision::Allow
    }
}

/// `decide` for a concrete path; unknown paths are allowed through.
#[must_use]
pub fn decide_path(path: &str, session: &SessionState, mode: GuardMode) -> NavDecision {
    match_route(path).map_or(NavDecision::Allow, |entry| decide(entry, session, mode))
}
