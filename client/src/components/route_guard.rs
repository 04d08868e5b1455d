//! Navigation guard bound to the router.
//!
//! Re-evaluates `router::decide_path` whenever the path or the session
//! changes and redirects when the policy says so. Renders nothing.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::use_app;
use crate::router::{NavDecision, decide_path};

/// Must be mounted inside `<Router>`.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let decision = session.with(|state| decide_path(&path, state, ctx.guard));
        if let NavDecision::Redirect(target) = decision {
            log::info!("route guard: {path} -> {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
