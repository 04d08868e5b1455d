//! Transport seam between the API client and the network.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always sending cookies.
//! Elsewhere: a stub that fails every request, since the backend session only
//! exists in the browser.
//!
//! DESIGN
//! ======
//! The API client only ever sees `ApiRequest` in and `RawResponse` out, so
//! stores and parsing can run natively against a scripted transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::api::ApiError;

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A file picked by the user for avatar upload, already read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Request payload.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Multipart form with a single file part.
    Multipart { field: &'static str, file: AvatarFile },
}

/// A fully resolved request, ready for a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Content type header to send, if any.
    ///
    /// Multipart bodies return `None` so the browser can add its own boundary.
    #[must_use]
    pub fn content_type(&self) -> Option<&'static str> {
        match self.body {
            RequestBody::Multipart { .. } => None,
            RequestBody::Empty | RequestBody::Json(_) => Some("application/json"),
        }
    }
}

/// Status code and undecoded body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry an `ApiRequest` to the backend.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::Request;
    use wasm_bindgen::JsValue;
    use web_sys::{Blob, BlobPropertyBag, FormData, RequestCredentials};

    use super::{ApiError, ApiRequest, AvatarFile, Method, RawResponse, RequestBody};

    pub(super) async fn send(request: ApiRequest) -> Result<RawResponse, ApiError> {
        let content_type = request.content_type();
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .credentials(RequestCredentials::Include);
        if let Some(content_type) = content_type {
            builder = builder.header("Content-Type", content_type);
        }

        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.body(value.to_string()),
            RequestBody::Multipart { field, file } => builder.body(form_data(field, &file)?),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp = prepared
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }

    fn form_data(field: &str, file: &AvatarFile) -> Result<FormData, ApiError> {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        if let Some(content_type) = &file.content_type {
            options.set_type(content_type);
        }
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(field, &blob, &file.file_name)
            .map_err(js_error)?;
        Ok(form)
    }

    fn js_error(err: JsValue) -> ApiError {
        ApiError::Transport(format!("{err:?}"))
    }
}
