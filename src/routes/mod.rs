//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview server fronts the built single-page app. `/api/*` is forwarded
//! to the REST backend so the client can use its same-origin `/api` base;
//! everything else is a static file, `index.html` for paths the client router
//! knows, or 404.

pub mod proxy;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{any, get};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.dist_dir)
        .fallback(get(spa_fallback).with_state(state.clone()));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", any(proxy::forward))
        .route("/api/{*rest}", any(proxy::forward))
        .fallback_service(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `index.html` for client routes, 404 for anything else.
async fn spa_fallback(State(state): State<AppState>, uri: Uri) -> Response {
    if blog_client::router::match_route(uri.path()).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    let index = state.config.dist_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(error = %e, path = %index.display(), "index.html unavailable");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
