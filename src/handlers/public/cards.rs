use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::api::format::CardCount;
use crate::error::ApiError;
use crate::state::AppState;
use crate::types::Card;

/// GET /cards - every card whose fields equal all query parameters
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Card>>, ApiError> {
    Ok(Json(state.cards.list(&filters).await?))
}

/// GET /cards/count
pub async fn count(State(state): State<Arc<AppState>>) -> Result<Json<CardCount>, ApiError> {
    let count = state.cards.count().await?;
    Ok(Json(CardCount { count }))
}

/// GET /cards/random - 404 when the collection is empty
pub async fn random(State(state): State<Arc<AppState>>) -> Result<Json<Card>, ApiError> {
    Ok(Json(state.cards.random().await?))
}
