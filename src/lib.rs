use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod store;
pub mod types;

pub use state::AppState;

/// Build the HTTP application around `state`
pub fn app(state: Arc<AppState>) -> Router {
    let api_config = &state.config.api;
    let security = &state.config.security;

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::public::root).fallback(handlers::not_found))
        .route(
            "/getToken",
            post(handlers::public::get_token).fallback(handlers::not_found),
        )
        .merge(public_card_routes())
        // Protected (bearer token required)
        .merge(protected_card_routes(state.clone()))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(api_config.max_request_size_bytes));

    if security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if api_config.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn public_card_routes() -> Router<Arc<AppState>> {
    use handlers::public;

    Router::new()
        .route("/cards", get(public::cards_list).fallback(handlers::not_found))
        .route("/cards/count", get(public::cards_count).fallback(handlers::not_found))
        .route("/cards/random", get(public::cards_random).fallback(handlers::not_found))
        .route("/sets", get(public::sets).fallback(handlers::not_found))
        .route("/types", get(public::types).fallback(handlers::not_found))
        .route("/rarities", get(public::rarities).fallback(handlers::not_found))
}

// The auth layer sits on each method router so a method mismatch reaches the
// JSON 404 fallback instead of being rejected for a missing token.
fn protected_card_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use handlers::protected;

    let auth = from_fn_with_state(state, middleware::jwt_auth_middleware);

    Router::new()
        .route(
            "/cards/create",
            post(protected::cards_create)
                .route_layer(auth.clone())
                .fallback(handlers::not_found),
        )
        .route(
            "/cards/:id",
            put(protected::cards_update)
                .delete(protected::cards_delete)
                .route_layer(auth)
                .fallback(handlers::not_found),
        )
}
