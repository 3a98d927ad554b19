// handlers/mod.rs - HTTP handlers, split by authentication requirement
//
// public/     - no token needed (liveness, token issuance, read-only card queries)
// protected/  - bearer token required (card create/update/delete)

pub mod protected;
pub mod public;

use crate::error::ApiError;

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
