// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};

use crate::auth::AuthError;
use crate::services::cards::CardError;
use crate::store::StoreError;

/// Message returned for every 5xx; the real cause is only logged
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong on the server.";

/// HTTP API error rendered as `{"errorMessage": ...}`
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(_) => GENERIC_SERVER_ERROR,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "errorMessage": self.message() })
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// The detail is logged here and never sent to the client
    pub fn internal_server_error(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        tracing::error!("Internal error: {}", detail);
        ApiError::InternalServerError(detail)
    }
}

// Convert other error types to ApiError
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::internal_server_error(format!("storage failure: {err}"))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredential
            | AuthError::InvalidCredential
            | AuthError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            AuthError::Signing(e) => {
                ApiError::internal_server_error(format!("token signing failed: {e}"))
            }
            AuthError::Store(e) => e.into(),
        }
    }
}

impl From<CardError> for ApiError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::DuplicateKey(_) | CardError::InvalidPayload(_) => {
                ApiError::bad_request(err.to_string())
            }
            CardError::NotFound(_) | CardError::Empty => ApiError::not_found(err.to_string()),
            CardError::Store(e) => e.into(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status().is_client_error() {
            ApiError::bad_request(rejection.body_text())
        } else {
            ApiError::internal_server_error(rejection.body_text())
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn auth_failures_are_401_with_message() {
        let err: ApiError = AuthError::MissingCredential.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_json(), json!({"errorMessage": "Missing token"}));

        let err: ApiError = AuthError::InvalidCredential.into();
        assert_eq!(err.to_json(), json!({"errorMessage": "Invalid or expired token"}));
    }

    #[test]
    fn storage_failures_hide_details() {
        let err: ApiError = StoreError::Read {
            path: PathBuf::from("/secret/cards.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        }
        .into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_json(), json!({"errorMessage": GENERIC_SERVER_ERROR}));
    }

    #[test]
    fn card_errors_map_to_client_statuses() {
        let dup: ApiError = CardError::DuplicateKey("Card ID must be unique").into();
        assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(dup.message(), "Card ID must be unique");

        let missing: ApiError = CardError::NotFound("9".to_string()).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.message(), "Card not found");
    }
}
