//! Identity resolver backed by the users service `/auth/me` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use posts_core::domain::ResolvedIdentity;
use posts_core::ports::{AuthError, IdentityResolver};

/// Upper bound on a single identity lookup.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity client configuration.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            timeout: MAX_TIMEOUT,
        }
    }
}

/// Body returned by `GET /auth/me`.
#[derive(Debug, Deserialize)]
struct MeResponse {
    #[serde(rename = "userId")]
    user_id: i64,
    name: String,
    email: String,
    role: String,
}

impl From<MeResponse> for ResolvedIdentity {
    fn from(me: MeResponse) -> Self {
        Self {
            id: me.user_id,
            name: me.name,
            email: me.email,
            role: me.role,
        }
    }
}

/// HTTP identity resolver. Every call goes to the network; nothing is cached.
pub struct HttpIdentityResolver {
    me_url: String,
    client: reqwest::Client,
}

impl HttpIdentityResolver {
    pub fn new(config: IdentityConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout.min(MAX_TIMEOUT))
            .build()?;

        Ok(Self {
            me_url: format!("{}/auth/me", config.base_url.trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    async fn resolve(&self, token: &str) -> Result<ResolvedIdentity, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }

        let response = self
            .client
            .get(&self.me_url)
            .bearer_auth(token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| AuthError::UpstreamUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::UpstreamUnavailable(e.to_string()))?;

        tracing::debug!(
            status = status.as_u16(),
            body_len = body.len(),
            "Identity service responded"
        );

        if status == StatusCode::UNAUTHORIZED {
            return Err(AuthError::InvalidToken);
        }
        if status != StatusCode::OK {
            return Err(AuthError::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<MeResponse>(&body)
            .map(Into::into)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))
    }
}
