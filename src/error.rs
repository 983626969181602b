/*
 * Responsibility
 * - Application-wide AppError definition (the error taxonomy)
 * - IntoResponse implementation (HTTP status / JSON error body)
 * - Classify repo / id-codec / validation failures by kind, not by the
 *   library type that produced them
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::id_codec::IdCodecError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{code}: {message}")]
    BadRequest { code: &'static str, message: String },
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("token missing or invalid")]
    Unauthenticated,
    #[error("not the owner of this resource")]
    Unauthorized,
    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::bad_request("VALIDATION", message)
    }

    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::BadRequest { code, message } => (StatusCode::BAD_REQUEST, code, message),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "invalid username or password".into(),
            ),
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "token missing or invalid".into(),
            ),
            // Ownership mismatch is also 401 (not 403), per policy.
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "not the owner of this resource".into(),
            ),
            AppError::NotFound { resource } => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{resource} not found."),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
                "internal server error".into(),
            ),
        };

        let body = ErrorResponse {
            error: ErrorBody { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            // Unique index on users."username"
            RepoError::Conflict => AppError::bad_request("USERNAME_TAKEN", "unique username required"),
            RepoError::Db(e) => {
                tracing::error!(error = %e, "repository failure");
                AppError::Internal
            }
        }
    }
}

impl From<IdCodecError> for AppError {
    fn from(e: IdCodecError) -> Self {
        match e {
            // Client supplied a malformed public id (e.g. /blogs/{id})
            IdCodecError::DecodeInvalidFormat | IdCodecError::DecodeOutOfRange => {
                AppError::bad_request("MALFORMED_ID", "malformatted id")
            }

            // Anything else is a server-side config / programming error
            _ => AppError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn client_errors_map_to_400() {
        assert_eq!(
            status_of(AppError::validation("title is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::from(IdCodecError::DecodeInvalidFormat)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::from(RepoError::Conflict)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn both_authorization_failures_are_401() {
        assert_eq!(status_of(AppError::Unauthenticated), StatusCode::UNAUTHORIZED);
        assert_eq!(status_of(AppError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn store_failures_leak_no_detail() {
        let err = AppError::from(RepoError::Db(sqlx::Error::PoolClosed));
        assert!(matches!(err, AppError::Internal));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_is_404() {
        assert_eq!(
            status_of(AppError::not_found("blog")),
            StatusCode::NOT_FOUND
        );
    }
}
