use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::AppError;

/// Failures raised while logging in or checking a bearer token.
///
/// Every variant except `SigningFailure` is caused by the client and ends up
/// as a bare 401. The variants stay distinct so logs can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("malformed token")]
    MalformedToken,
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("failed to sign token: {0}")]
    SigningFailure(String),
}

impl AuthError {
    /// Stable label used as the `kind` field in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "invalid_credentials",
            AuthError::MalformedHeader => "malformed_header",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "expired",
            AuthError::SigningFailure(_) => "signing_failure",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::SigningFailure(detail) => {
                tracing::error!(kind = "signing_failure", "token signing failed: {}", detail);
                AppError::InternalServerError.into_response()
            }
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}
