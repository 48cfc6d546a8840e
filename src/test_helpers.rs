//! Common test helpers shared across test modules.
//!
//! Hand-written fakes for the request factory, transport and logger so the
//! milestone operation can be exercised without a network stack.
use async_trait::async_trait;
use reqwest::{
    Method, Url,
    header::{HOST, HeaderValue},
};
use std::sync::Mutex;

use crate::github::{
    config::ApiToken,
    logger::{RequestLogger, RequestRecord},
    request::{HttpRequest, HttpResponse, RequestFactory},
    transport::{HttpTransport, TransportError},
};

pub const TEST_TOKEN: &str = "apiToken-test-123";

pub fn create_test_token() -> ApiToken {
    ApiToken::try_from(TEST_TOKEN.to_string()).unwrap()
}

/// Records every `builds` call and always returns a request for a fixed
/// URL, with Host derived from it.
pub struct FakeRequestFactory {
    target: Url,
    calls: Mutex<Vec<(Method, Url)>>,
}

impl FakeRequestFactory {
    pub fn new(target: &str) -> Self {
        Self {
            target: Url::parse(target).unwrap(),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<(Method, Url)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RequestFactory for FakeRequestFactory {
    fn builds(&self, method: Method, url: Url) -> HttpRequest {
        self.calls.lock().unwrap().push((method.clone(), url));

        let host = self.target.host_str().unwrap().to_string();
        HttpRequest::new(method, self.target.clone())
            .with_header(HOST, HeaderValue::from_str(&host).unwrap())
    }
}

/// Returns a canned response (or error) and keeps every request it saw.
pub struct FakeTransport {
    response: Option<HttpResponse>,
    error: Option<String>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn responding(response: HttpResponse) -> Self {
        Self {
            response: Some(response),
            error: None,
            requests: Mutex::new(vec![]),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: None,
            error: Some(message.to_string()),
            requests: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(
        &self,
        request: HttpRequest,
    ) -> std::result::Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);

        if let Some(message) = &self.error {
            return Err(TransportError::Connection(message.clone()));
        }

        Ok(self.response.clone().unwrap())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<RequestRecord>>,
}

impl RecordingLogger {
    pub fn records(&self) -> Vec<RequestRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl RequestLogger for RecordingLogger {
    fn log_request(&self, record: &RequestRecord) {
        self.records.lock().unwrap().push(record.clone());
    }
}
