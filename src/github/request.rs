use reqwest::{
    Method, StatusCode, Url,
    header::{HOST, HeaderMap, HeaderName, HeaderValue},
};

#[derive(Debug, Clone)]
/// Fully formed request handed to a transport.
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    /// Sets a header, replacing any previous value under the same name.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Header value as a string, for inspection in logs and tests.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Debug, Clone)]
/// Raw response returned by a transport.
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Creates empty requests that callers decorate with headers and a body.
pub trait RequestFactory: Send + Sync {
    fn builds(&self, method: Method, url: Url) -> HttpRequest;
}

/// Factory that only adds the `Host` header derived from the target URL.
#[derive(Debug, Default, Clone)]
pub struct DefaultRequestFactory;

impl RequestFactory for DefaultRequestFactory {
    fn builds(&self, method: Method, url: Url) -> HttpRequest {
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => Some(format!("{host}:{port}")),
            (Some(host), None) => Some(host.to_string()),
            _ => None,
        };

        let mut request = HttpRequest::new(method, url);

        if let Some(value) =
            host.and_then(|h| HeaderValue::from_str(&h).ok())
        {
            request.headers.insert(HOST, value);
        }

        request
    }
}
