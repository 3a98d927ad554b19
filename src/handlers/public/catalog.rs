// Distinct-value listings over card fields

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::CatalogField;

async fn distinct(state: &AppState, field: CatalogField) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.cards.distinct(field).await?))
}

/// GET /sets
pub async fn sets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    distinct(&state, CatalogField::Set).await
}

/// GET /types
pub async fn types(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    distinct(&state, CatalogField::Type).await
}

/// GET /rarities
pub async fn rarities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    distinct(&state, CatalogField::Rarity).await
}
