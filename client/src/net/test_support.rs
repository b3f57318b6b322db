//! Shared doubles for gateway-level tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::error::TransportError;
use super::gateway::ApiGateway;
use super::transport::{HttpRequest, HttpResponse, Transport};
use super::types::User;
use crate::config::ApiConfig;
use crate::state::auth::AuthContext;
use crate::util::navigation::Navigator;
use crate::util::session_store::SessionStore;
use crate::util::storage::MemoryStorage;

/// Records every request and replays scripted replies (default `200 null`).
#[derive(Default)]
pub struct MockTransport {
    sent: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockTransport {
    pub fn replying(replies: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self { sent: Mutex::default(), replies: Mutex::new(replies.into()) })
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> HttpRequest {
        self.sent.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "null")))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.redirects.lock().unwrap().push(path.to_owned());
    }
}

pub struct Harness {
    pub storage: MemoryStorage,
    pub transport: Arc<MockTransport>,
    pub navigator: Arc<RecordingNavigator>,
    pub gateway: ApiGateway,
}

/// Resolved, signed-out gateway against `https://api.example.edu`.
pub fn harness(replies: Vec<Result<HttpResponse, TransportError>>) -> Harness {
    let storage = MemoryStorage::new();
    let auth = AuthContext::new(SessionStore::new(storage.clone()));
    auth.resolve();
    let transport = MockTransport::replying(replies);
    let navigator = Arc::new(RecordingNavigator::default());
    let gateway = ApiGateway::new(
        ApiConfig::new("https://api.example.edu"),
        auth,
        transport.clone(),
        navigator.clone(),
    );
    Harness { storage, transport, navigator, gateway }
}

/// Like [`harness`] but signed in as user `1` with token `tok123`.
pub fn signed_in(replies: Vec<Result<HttpResponse, TransportError>>) -> Harness {
    let h = harness(replies);
    h.gateway.auth().login(User::new("1", "a@b.com"), "tok123");
    h
}
