//! Bearer-token authentication extractors.
//!
//! Tokens are resolved against the identity service on every request; the
//! resulting identity is handed to handlers as an explicit argument.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use posts_core::domain::ResolvedIdentity;

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Authenticated caller.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: ResolvedIdentity,
    /// Raw bearer token, needed by operations that re-resolve the caller.
    pub token: String,
}

impl Identity {
    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &HttpRequest) -> Result<String, AppError> {
    let auth_header = req.headers().get(header::AUTHORIZATION).ok_or_else(|| {
        AppError::unauthorized(
            "MISSING_TOKEN",
            "Authorization header required",
            "Authorization header with Bearer token is required",
        )
    })?;

    let invalid_format = || {
        AppError::unauthorized(
            "INVALID_TOKEN_FORMAT",
            "Invalid authorization header format",
            "Authorization header must be in format: Bearer <token>",
        )
    };

    let auth_str = auth_header.to_str().map_err(|_| invalid_format())?;

    let mut parts = auth_str.split(' ');
    let (Some("Bearer"), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid_format());
    };

    if token.is_empty() {
        return Err(AppError::unauthorized(
            "EMPTY_TOKEN",
            "Token is required",
            "Bearer token cannot be empty",
        ));
    }

    Ok(token.to_string())
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let resolver = req
            .app_data::<web::Data<AppState>>()
            .map(|state| state.identity.clone());
        let token = bearer_token(req);

        Box::pin(async move {
            let Some(resolver) = resolver else {
                tracing::error!("AppState not found in app data");
                return Err(AppError::Internal("Server configuration error".to_string()));
            };
            let token = token?;

            let user = resolver.resolve(&token).await.map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                AppError::unauthorized("INVALID_TOKEN", "Invalid token", e.to_string())
            })?;

            Ok(Identity { user, token })
        })
    }
}

/// Optional identity extractor - doesn't fail if not authenticated.
///
/// Used on public routes to decide whether author details may be shown.
pub struct OptionalIdentity(pub Option<Identity>);

impl OptionalIdentity {
    pub fn user(&self) -> Option<&ResolvedIdentity> {
        self.0.as_ref().map(|identity| &identity.user)
    }
}

impl FromRequest for OptionalIdentity {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if !req.headers().contains_key(header::AUTHORIZATION) {
            return Box::pin(async { Ok(OptionalIdentity(None)) });
        }

        let identity = Identity::from_request(req, payload);
        Box::pin(async move { Ok(OptionalIdentity(identity.await.ok())) })
    }
}
