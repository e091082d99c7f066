//! Error handling - maps failures onto the response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use posts_core::DomainError;
use posts_shared::{ApiResponse, FieldError};

/// Application-level error type rendered as an `ApiResponse` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("Bad request ({code}): {message}")]
    BadRequest {
        code: &'static str,
        message: String,
        details: Option<String>,
    },

    #[error("Unauthorized ({code}): {message}")]
    Unauthorized {
        code: &'static str,
        message: String,
        details: Option<String>,
    },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Validation errors: {0:?}")]
    Validation(Vec<FieldError>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());

        match self {
            AppError::NotFound { resource } => response.json(ApiResponse::error(
                "NOT_FOUND",
                format!("{} not found", resource),
                Some(format!("The requested {} does not exist", resource)),
            )),
            AppError::BadRequest {
                code,
                message,
                details,
            }
            | AppError::Unauthorized {
                code,
                message,
                details,
            } => response.json(ApiResponse::error(*code, message.clone(), details.clone())),
            AppError::Forbidden(details) => response.json(ApiResponse::error(
                "FORBIDDEN",
                "Access denied",
                Some(details.clone()),
            )),
            AppError::Validation(errors) => response.json(ApiResponse::validation(errors.clone())),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                response.json(ApiResponse::error(
                    "INTERNAL_ERROR",
                    "Internal server error",
                    None,
                ))
            }
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, .. } => AppError::NotFound {
                resource: entity_type,
            },
            DomainError::Unauthorized => {
                AppError::Forbidden("You can only modify your own posts".to_string())
            }
            e @ DomainError::IdentityMismatch { .. } => {
                AppError::unauthorized("IDENTITY_MISMATCH", "Identity mismatch", e.to_string())
            }
            DomainError::Auth(e) => AppError::unauthorized("INVALID_TOKEN", "Invalid token", e.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Persistence(e) => {
                tracing::error!(error = %e, "Persistence failure");
                AppError::Internal(e.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use posts_core::error::RepoError;
    use posts_core::ports::AuthError;

    #[test]
    fn test_domain_errors_map_to_one_status_each() {
        let cases = [
            (
                DomainError::NotFound {
                    entity_type: "Post",
                    id: 1,
                },
                StatusCode::NOT_FOUND,
            ),
            (DomainError::Unauthorized, StatusCode::FORBIDDEN),
            (
                DomainError::IdentityMismatch {
                    asserted: 1,
                    resolved: 2,
                },
                StatusCode::UNAUTHORIZED,
            ),
            (
                DomainError::Auth(AuthError::UpstreamUnavailable("timeout".into())),
                StatusCode::UNAUTHORIZED,
            ),
            (DomainError::Validation(vec![]), StatusCode::BAD_REQUEST),
            (
                DomainError::Persistence(RepoError::Query("boom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain, status) in cases {
            assert_eq!(AppError::from(domain).status_code(), status);
        }
    }
}
