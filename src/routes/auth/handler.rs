use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState,
    auth::{AuthError, Credential},
};

use super::model::LoginResponse;

/// `200 {"token": ...}` for the reference credential, a bare 401 otherwise.
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(credential): Json<Credential>,
) -> Result<Response, AuthError> {
    match state.login.issue(&credential)? {
        Some(token) => {
            tracing::info!("Issued token for {}", credential.username);
            Ok((StatusCode::OK, Json(LoginResponse { token })).into_response())
        }
        None => {
            let err = AuthError::InvalidCredentials;
            tracing::warn!(kind = err.kind(), "Login rejected");
            Err(err)
        }
    }
}
