use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

use crate::{
    data::datasources::{
        api_client::ApiClient,
        http_transport::{HttpRequest, HttpResponse, HttpTransport, TransportFailure},
        storage_datasource::MemoryStorage,
    },
    domain::logic::session_store::SessionStore,
    ext::standard_handlers::{BufferedNotifier, HistoryNavigator},
};

pub(crate) const TEST_BASE_API: &str = "http://api.test/dev-api";

/// Transport that replays queued results and records every request.
#[derive(Default)]
pub(crate) struct FakeTransport {
    results: Mutex<VecDeque<Result<HttpResponse, TransportFailure>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub(crate) fn new(results: Vec<Result<HttpResponse, TransportFailure>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportFailure> {
        self.requests.lock().unwrap().push(request);
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .expect("fake transport ran out of responses")
    }
}

pub(crate) fn json_response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: body.as_bytes().to_vec(),
    }
}

/// `{"code":200,"data":<data>}`.
pub(crate) fn ok_envelope(data: &str) -> HttpResponse {
    json_response(200, &format!(r#"{{"code":200,"msg":"ok","data":{data}}}"#))
}

/// A client wired to fakes, with every collaborator reachable from tests.
pub(crate) struct Harness {
    pub(crate) client: Arc<ApiClient>,
    pub(crate) transport: Arc<FakeTransport>,
    pub(crate) session: Arc<SessionStore>,
    pub(crate) notifier: Arc<BufferedNotifier>,
    pub(crate) navigator: Arc<HistoryNavigator>,
}

impl Harness {
    pub(crate) fn new(responses: Vec<HttpResponse>) -> Self {
        Self::with_results(responses.into_iter().map(Ok).collect())
    }

    pub(crate) fn with_results(results: Vec<Result<HttpResponse, TransportFailure>>) -> Self {
        let transport = Arc::new(FakeTransport::new(results));
        let session = Arc::new(SessionStore::new(Arc::new(MemoryStorage::new())));
        let notifier = Arc::new(BufferedNotifier::new());
        let navigator = Arc::new(HistoryNavigator::default());
        let client = ApiClient::new(
            transport.clone(),
            session.clone(),
            notifier.clone(),
            navigator.clone(),
            TEST_BASE_API,
            Duration::from_millis(10_000),
        )
        .unwrap();
        Self {
            client: Arc::new(client),
            transport,
            session,
            notifier,
            navigator,
        }
    }

    pub(crate) async fn login(&self, token: &str, permissions: &[&str]) {
        self.session
            .set_auth(token, permissions.iter().map(|p| p.to_string()).collect())
            .await
            .unwrap();
    }

    /// Path (relative to the base address) of the last request.
    pub(crate) fn last_path(&self) -> String {
        let url = self.transport.last_request().url;
        url.strip_prefix(TEST_BASE_API).unwrap_or(&url).to_string()
    }
}
