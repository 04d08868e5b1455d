//! Reverse proxy for `/api/*`.
//!
//! DESIGN
//! ======
//! Requests are forwarded verbatim (method, path, query, body) minus
//! hop-by-hop headers; the upstream status, headers (`set-cookie` included)
//! and body are relayed back. Bodies are buffered, which is fine for JSON and
//! the avatar uploads this backend accepts.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out backend becomes 502 with the backend's own
//! `{success, message}` envelope so the client surfaces a readable message.

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Upper bound on a buffered request body; above the backend's 5 MiB upload cap.
const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Headers that describe one connection and must not be forwarded.
static HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body rejected: {0}")]
    Body(String),
    #[error("backend unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Body(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, %status, "proxy request failed");
        let body = serde_json::json!({ "success": false, "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Forward one request to the backend and relay its response.
///
/// # Errors
///
/// `ProxyError` when the body cannot be buffered or the backend is unreachable.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let url = upstream_url(&state.config.backend_url, &parts.uri);
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut headers = strip_hop_by_hop(&parts.headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    tracing::debug!(method = %parts.method, %url, "proxying");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let mut headers = strip_hop_by_hop(upstream.headers());
    headers.remove(header::CONTENT_LENGTH);
    let bytes: Bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Backend URL for an incoming `/api/...` URI, query preserved.
pub(crate) fn upstream_url(backend: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path_and_query}", backend.trim_end_matches('/'))
}

/// Copy `headers` without hop-by-hop entries, including any named by `Connection`.
pub(crate) fn strip_hop_by_hop(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name) || listed.contains(name) {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
