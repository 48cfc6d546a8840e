//! Creates milestones through the GitHub v3 REST API.
use async_trait::async_trait;
use reqwest::{
    Method, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, USER_AGENT},
};
use std::{sync::Arc, time::Duration};

use crate::{
    Result,
    error::MilestoneError,
    github::{
        classify::classify_response,
        config::{self, ApiToken, GITHUB_API_BASE_URL, JSON_CONTENT_TYPE},
        logger::{DebugRequestLogger, RequestLogger, RequestRecord},
        request::{DefaultRequestFactory, RequestFactory},
        transport::{HttpTransport, ReqwestTransport},
        types,
    },
    value::{RepositoryName, SemVerVersion},
};

/// Creates a milestone titled after `version` and returns its web URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreateMilestone: Send + Sync {
    async fn create_milestone(
        &self,
        repository: &RepositoryName,
        version: &SemVerVersion,
    ) -> Result<String>;
}

/// `POST /repos/{owner}/{name}/milestones`, one call per invocation and
/// no retries.
pub struct CreateMilestoneThroughApiCall {
    request_factory: Arc<dyn RequestFactory>,
    transport: Arc<dyn HttpTransport>,
    api_token: ApiToken,
    logger: Arc<dyn RequestLogger>,
}

impl CreateMilestoneThroughApiCall {
    pub fn new(
        request_factory: Arc<dyn RequestFactory>,
        transport: Arc<dyn HttpTransport>,
        api_token: ApiToken,
        logger: Arc<dyn RequestLogger>,
    ) -> Self {
        Self {
            request_factory,
            transport,
            api_token,
            logger,
        }
    }

    /// Production wiring: reqwest transport with the given deadline, Host
    /// derived from the URL and request logging through `log`.
    pub fn with_reqwest(api_token: ApiToken, timeout: Duration) -> Result<Self> {
        let transport = ReqwestTransport::new(timeout)?;

        Ok(Self::new(
            Arc::new(DefaultRequestFactory),
            Arc::new(transport),
            api_token,
            Arc::new(DebugRequestLogger),
        ))
    }
}

/// `https://api.github.com/repos/{owner}/{name}/milestones`
pub fn milestones_url(repository: &RepositoryName) -> Result<Url> {
    milestones_url_on(GITHUB_API_BASE_URL, repository)
}

fn milestones_url_on(base: &str, repository: &RepositoryName) -> Result<Url> {
    let mut endpoint = Url::parse(base)?;

    endpoint
        .path_segments_mut()
        .map_err(|_| MilestoneError::InvalidEndpoint(base.to_string()))?
        .pop_if_empty()
        .extend([
            "repos",
            repository.owner(),
            repository.name(),
            "milestones",
        ]);

    Ok(endpoint)
}

#[async_trait]
impl CreateMilestone for CreateMilestoneThroughApiCall {
    async fn create_milestone(
        &self,
        repository: &RepositoryName,
        version: &SemVerVersion,
    ) -> Result<String> {
        let url = milestones_url(repository)?;

        let body = serde_json::to_string(&types::CreateMilestone {
            title: version.render(),
        })?;

        let mut authorization =
            HeaderValue::from_str(&self.api_token.authorization())?;
        authorization.set_sensitive(true);

        let request = self
            .request_factory
            .builds(Method::POST, url)
            .with_header(
                CONTENT_TYPE,
                HeaderValue::from_static(JSON_CONTENT_TYPE),
            )
            .with_header(USER_AGENT, HeaderValue::from_static(config::USER_AGENT))
            .with_header(AUTHORIZATION, authorization)
            .with_body(body);

        self.logger.log_request(&RequestRecord::from(&request));

        let response = self.transport.send(request).await?;

        let url = classify_response(response.status, &response.body)
            .into_result()?;

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    use crate::{
        error::FailureReason,
        github::{request::HttpResponse, transport::TransportError},
        test_helpers::{
            FakeRequestFactory, FakeTransport, RecordingLogger, TEST_TOKEN,
            create_test_token,
        },
    };

    const EXPECTED_URL: &str =
        "https://api.github.com/repos/foo/bar/milestones";

    struct Harness {
        factory: Arc<FakeRequestFactory>,
        transport: Arc<FakeTransport>,
        logger: Arc<RecordingLogger>,
        operation: CreateMilestoneThroughApiCall,
    }

    fn harness(transport: FakeTransport) -> Harness {
        let factory = Arc::new(FakeRequestFactory::new(
            "https://the-domain.com/the-path",
        ));
        let transport = Arc::new(transport);
        let logger = Arc::new(RecordingLogger::default());

        let operation = CreateMilestoneThroughApiCall::new(
            factory.clone(),
            transport.clone(),
            create_test_token(),
            logger.clone(),
        );

        Harness {
            factory,
            transport,
            logger,
            operation,
        }
    }

    fn repo() -> RepositoryName {
        RepositoryName::from_full_name("foo/bar").unwrap()
    }

    fn version() -> SemVerVersion {
        SemVerVersion::from_milestone_name("1.2.3").unwrap()
    }

    fn assert_sent_request(h: &Harness) {
        let requests = h.transport.requests();
        assert_eq!(requests.len(), 1);

        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.headers.len(), 4);
        assert_eq!(request.header("Host"), Some("the-domain.com"));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
        assert_eq!(
            request.header("User-Agent"),
            Some("Ocramius's minimal API V3 client")
        );
        assert_eq!(
            request.header("Authorization"),
            Some(format!("token {TEST_TOKEN}").as_str())
        );

        let body: serde_json::Value =
            serde_json::from_str(&request.body).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "1.2.3" }));
        assert_eq!(request.body, r#"{"title":"1.2.3"}"#);
    }

    #[test]
    fn builds_milestones_url() {
        assert_eq!(milestones_url(&repo()).unwrap().as_str(), EXPECTED_URL);
    }

    #[test]
    fn milestones_url_encodes_path_segments() {
        let repo = RepositoryName::from_full_name("some owner/a?b").unwrap();
        assert_eq!(
            milestones_url(&repo).unwrap().as_str(),
            "https://api.github.com/repos/some%20owner/a%3Fb/milestones"
        );
    }

    #[test]
    fn base_without_path_is_an_invalid_endpoint() {
        let err = milestones_url_on("mailto:api@github.com", &repo())
            .unwrap_err();

        assert!(matches!(
            err,
            MilestoneError::InvalidEndpoint(ref base) if base == "mailto:api@github.com"
        ));
    }

    #[test_log::test(tokio::test)]
    async fn successful_request_returns_html_url() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            r#"{"html_url": "http://another-domain.com/the-pr"}"#,
        )));

        let url = h
            .operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap();

        assert_eq!(url, "http://another-domain.com/the-pr");
        assert_sent_request(&h);

        let built = h.factory.calls();
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].0, Method::POST);
        assert_eq!(built[0].1.as_str(), EXPECTED_URL);
    }

    #[tokio::test]
    async fn existing_milestone_fails_with_already_exists() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{
                "documentation_url": "https://docs.github.com/rest/reference/issues#create-a-milestone",
                "errors": [
                    {
                        "code": "already_exists",
                        "field": "title",
                        "resource": "Milestone"
                    }
                ],
                "message": "Validation Failed"
            }"#,
        )));

        let err = h
            .operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap_err();

        match err {
            MilestoneError::CreateMilestoneFailed(failed) => {
                assert_eq!(failed.reason(), FailureReason::AlreadyExists);
                assert_eq!(failed.to_string(), "already_exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_sent_request(&h);
    }

    #[tokio::test]
    async fn unexpected_status_carries_status_and_body() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "server exploded",
        )));

        let err = h
            .operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap_err();

        match err {
            MilestoneError::CreateMilestoneFailed(failed) => {
                assert_eq!(failed.reason(), FailureReason::UnexpectedStatus);
                assert_eq!(failed.status(), StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(failed.body(), "server exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn created_without_html_url_fails() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            "{}",
        )));

        let err = h
            .operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unexpected success payload");
        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn transport_errors_are_propagated_unchanged() {
        let h = harness(FakeTransport::failing("connection refused"));

        let err = h
            .operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap_err();

        match err {
            MilestoneError::Transport(TransportError::Connection(msg)) => {
                assert_eq!(msg, "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(h.transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn logs_request_without_credential() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            r#"{"html_url": "http://x/y"}"#,
        )));

        h.operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap();

        let records = h.logger.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].method, Method::POST);
        assert_eq!(records[0].url.as_str(), "https://the-domain.com/the-path");
        assert!(!format!("{:?}", records[0]).contains(TEST_TOKEN));
    }

    #[tokio::test]
    async fn renders_prerelease_versions_into_title() {
        let h = harness(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            r#"{"html_url": "http://x/y"}"#,
        )));
        let version =
            SemVerVersion::from_milestone_name("2.0.0-rc.1+build.7").unwrap();

        h.operation.create_milestone(&repo(), &version).await.unwrap();

        let requests = h.transport.requests();
        assert_eq!(requests[0].body, r#"{"title":"2.0.0-rc.1+build.7"}"#);
    }

    #[tokio::test]
    async fn rejects_token_that_cannot_be_a_header() {
        let transport = Arc::new(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            r#"{"html_url": "http://x/y"}"#,
        )));
        let operation = CreateMilestoneThroughApiCall::new(
            Arc::new(DefaultRequestFactory),
            transport.clone(),
            ApiToken::try_from("bad\ntoken".to_string()).unwrap(),
            Arc::new(RecordingLogger::default()),
        );

        let err = operation
            .create_milestone(&repo(), &version())
            .await
            .unwrap_err();

        assert!(matches!(err, MilestoneError::InvalidApiToken(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn default_factory_targets_api_host() {
        let transport = Arc::new(FakeTransport::responding(HttpResponse::new(
            StatusCode::CREATED,
            r#"{"html_url": "http://x/y"}"#,
        )));
        let operation = CreateMilestoneThroughApiCall::new(
            Arc::new(DefaultRequestFactory),
            transport.clone(),
            create_test_token(),
            Arc::new(RecordingLogger::default()),
        );

        operation.create_milestone(&repo(), &version()).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url.as_str(), EXPECTED_URL);
        assert_eq!(requests[0].header("host"), Some("api.github.com"));
    }
}
