use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections render as the `{errorMessage}` envelope
/// (400 for malformed bodies or a missing JSON content type).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
