use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::Value;
use tracing::info;

use crate::api::{
    format::{CardCreated, CardDeleted, CardUpdated},
    JsonBody,
};
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /cards/create - append a card with a new `cardId`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<Json<CardCreated>, ApiError> {
    let card = state.cards.create(payload).await?;
    info!(user = %user.username, card_id = card.card_id(), "card created");
    Ok(Json(CardCreated::new(card)))
}

/// PUT /cards/:id - shallow-merge the payload into an existing card
pub async fn update(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<Value>,
) -> Result<Json<CardUpdated>, ApiError> {
    let card = state.cards.update(&id, payload).await?;
    info!(user = %user.username, card_id = %id, "card updated");
    Ok(Json(CardUpdated::new(card)))
}

/// DELETE /cards/:id
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<CardDeleted>, ApiError> {
    let card = state.cards.delete(&id).await?;
    info!(user = %user.username, card_id = %id, "card deleted");
    Ok(Json(CardDeleted::new(card)))
}
