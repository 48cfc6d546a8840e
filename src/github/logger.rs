use log::*;
use reqwest::{Method, Url};

use crate::github::request::HttpRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
/// What gets logged about an outgoing request. Headers are left out so the
/// credential can never reach a log line.
pub struct RequestRecord {
    pub method: Method,
    pub url: Url,
}

impl From<&HttpRequest> for RequestRecord {
    fn from(request: &HttpRequest) -> Self {
        Self {
            method: request.method.clone(),
            url: request.url.clone(),
        }
    }
}

/// Receives a record for each request before it is sent.
pub trait RequestLogger: Send + Sync {
    fn log_request(&self, record: &RequestRecord);
}

/// Writes request records through the `log` facade at debug level.
#[derive(Debug, Default, Clone)]
pub struct DebugRequestLogger;

impl RequestLogger for DebugRequestLogger {
    fn log_request(&self, record: &RequestRecord) {
        debug!("sending request: {} {}", record.method, record.url);
    }
}
