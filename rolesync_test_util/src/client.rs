use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
};

use reqwest::StatusCode;
use rolesync_api_client::{
    api::roles::RoleStrategyApi,
    server::ApiServerOptions,
    ApiServer,
    ClientResult,
    HttpClient,
    ServerResponse,
};
use url::Url;


pub const SAMPLE_ROLE_LISTING: &str = r#"{"admin":["admin"],"build":["u1","u2"]}"#;


/// A request observed by [`RecordingClient`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: Url,
}

impl RecordedRequest {
    /// Last path segment of the request URL, e.g. `addRole`.
    pub fn endpoint(&self) -> &str {
        self.url
            .path_segments()
            .and_then(|segments| segments.last())
            .unwrap_or("")
    }

    pub fn query(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    pub fn has_query(&self, key: &str) -> bool {
        self.query(key).is_some()
    }
}



/// An [`HttpClient`] that never touches the network. It records every request
/// and answers `200 OK`, except for requests scripted to fail.
pub struct RecordingClient {
    server: ApiServer,
    requests: RefCell<Vec<RecordedRequest>>,
    failures: HashMap<usize, StatusCode>,
    next_request_index: Cell<usize>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self {
            server: ApiServer::new("ci.example.org", ApiServerOptions::default()),
            requests: RefCell::new(Vec::new()),
            failures: HashMap::new(),
            next_request_index: Cell::new(0),
        }
    }

    /// Makes the `request_index`-th request (zero-based) respond with `status`.
    pub fn failing_request(mut self, request_index: usize, status: StatusCode) -> Self {
        self.failures.insert(request_index, status);
        self
    }

    pub fn role_strategy(&self) -> RoleStrategyApi<'_, Self> {
        RoleStrategyApi::new(self)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, endpoint: &str) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|request| request.endpoint() == endpoint)
            .cloned()
            .collect()
    }

    fn record(&self, method: &'static str, url: Url) -> StatusCode {
        let request_index = self.next_request_index.get();
        self.next_request_index.set(request_index + 1);

        self.requests
            .borrow_mut()
            .push(RecordedRequest { method, url });

        self.failures
            .get(&request_index)
            .copied()
            .unwrap_or(StatusCode::OK)
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for RecordingClient {
    fn server(&self) -> &ApiServer {
        &self.server
    }

    async fn get(&self, url: Url) -> ClientResult<ServerResponse> {
        let status = self.record("GET", url);

        Ok(ServerResponse::new(status, SAMPLE_ROLE_LISTING))
    }

    async fn post(&self, url: Url) -> ClientResult<ServerResponse> {
        let status = self.record("POST", url);

        Ok(ServerResponse::new(status, ""))
    }
}
