//! Identity resolution port.

use async_trait::async_trait;

use crate::domain::ResolvedIdentity;

/// Resolves a bearer token into the identity that owns it.
///
/// Implementations must not cache: every call reflects the authority's
/// current view of the token.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<ResolvedIdentity, AuthError>;
}

/// Identity resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Identity service returned status {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Identity service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Malformed identity response: {0}")]
    MalformedResponse(String),
}
