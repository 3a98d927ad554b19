use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::api::{format::TokenIssued, JsonBody};
use crate::auth::AuthError;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /getToken - exchange username/password for a bearer token
pub async fn get_token(
    State(state): State<Arc<AppState>>,
    JsonBody(payload): JsonBody<TokenRequest>,
) -> Result<Json<TokenIssued>, ApiError> {
    let (Some(username), Some(password)) = (payload.username, payload.password) else {
        return Err(AuthError::InvalidCredentials.into());
    };

    let token = state
        .tokens
        .issue_for_credentials(state.users.as_ref(), &username, &password)
        .await
        .map_err(|e| {
            if matches!(e, AuthError::InvalidCredentials) {
                tracing::info!(%username, "token request rejected");
            }
            ApiError::from(e)
        })?;

    tracing::info!(%username, "token issued");
    Ok(Json(TokenIssued::new(token)))
}
