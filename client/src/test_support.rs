//! In-memory stand-ins for the browser used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use serde_json::Value;

use crate::net::api::{ApiClient, ApiConfig, ApiError};
use crate::net::transport::{ApiRequest, RawResponse, Transport};
use crate::util::storage::PreferenceStorage;

/// Transport that replays queued responses and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, ApiError>>>>,
    sent: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub(crate) fn reply_json(&self, status: u16, body: Value) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_string() }));
        self
    }

    pub(crate) fn reply_raw(&self, status: u16, body: &str) -> &Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(RawResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, err: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(err));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.sent.borrow().last().cloned().expect("no request sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
    }
}

/// API client rooted at `/api` over a fresh scripted transport.
pub(crate) fn scripted_client() -> (ApiClient<ScriptedTransport>, ScriptedTransport) {
    let transport = ScriptedTransport::default();
    (ApiClient::new(ApiConfig::production(), transport.clone()), transport)
}

/// `localStorage` + `matchMedia` stand-in.
#[derive(Clone, Default)]
pub(crate) struct MemoryPrefs {
    items: Rc<RefCell<HashMap<String, String>>>,
    prefers_dark: Rc<Cell<bool>>,
}

impl MemoryPrefs {
    pub(crate) fn with_system_dark(dark: bool) -> Self {
        let prefs = Self::default();
        prefs.prefers_dark.set(dark);
        prefs
    }

    pub(crate) fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryPrefs {
    fn get_item(&self, key: &str) -> Option<String> {
        self.item(key)
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark.get()
    }
}
