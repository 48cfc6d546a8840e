//! Configuration for the GitHub milestones API.
use secrecy::{ExposeSecret, SecretString};

use crate::{Result, error::MilestoneError};

/// Base URL of the GitHub v3 REST API. Milestones are only ever created
/// against this host.
pub const GITHUB_API_BASE_URL: &str = "https://api.github.com";
/// User agent sent with every API call.
pub const USER_AGENT: &str = "Ocramius's minimal API V3 client";
/// Content type of create-milestone bodies.
pub const JSON_CONTENT_TYPE: &str = "application/json";
/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Non-empty GitHub access token.
#[derive(Debug, Clone)]
pub struct ApiToken(SecretString);

impl ApiToken {
    pub fn new(token: SecretString) -> Result<Self> {
        if token.expose_secret().is_empty() {
            return Err(MilestoneError::EmptyApiToken);
        }

        Ok(Self(token))
    }

    /// Value of the `Authorization` header.
    pub(crate) fn authorization(&self) -> String {
        format!("token {}", self.0.expose_secret())
    }
}

impl TryFrom<String> for ApiToken {
    type Error = MilestoneError;

    fn try_from(token: String) -> Result<Self> {
        Self::new(SecretString::from(token))
    }
}
