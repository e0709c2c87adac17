use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};

use crate::{AppState, auth::AuthError};

const BEARER_SCHEMA: &str = "Bearer ";

/// Pulls the raw token out of `Authorization: Bearer <token>`.
///
/// A missing header is read as an empty one. Anything that does not start
/// with the bearer prefix is `MalformedHeader`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = match headers.get(AUTHORIZATION) {
        Some(value) => value.to_str().map_err(|_| AuthError::MalformedHeader)?,
        None => "",
    };

    header
        .strip_prefix(BEARER_SCHEMA)
        .ok_or(AuthError::MalformedHeader)
}

/// Rejects the request with 401 unless it carries a valid bearer token.
/// On success the decoded `Claims` are available to handlers as an extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = match extract_bearer_token(req.headers())
        .and_then(|token| state.jwt.validate_token(token))
    {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                kind = err.kind(),
                method = %req.method(),
                path = %req.uri().path(),
                "Rejected request: {}",
                err
            );
            return Err(err);
        }
    };

    tracing::debug!(
        name = %claims.name,
        admin = claims.admin,
        iss = %claims.iss,
        iat = claims.iat,
        exp = claims.exp,
        "Authorized request"
    );

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
