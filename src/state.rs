use std::sync::Arc;

use chrono::Duration;

use crate::auth::TokenService;
use crate::config::AppConfig;
use crate::services::CardService;
use crate::store::{CardStore, CredentialStore, JsonFileCardStore, JsonFileUsers};

/// Dependencies shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub cards: CardService,
    pub users: Arc<dyn CredentialStore>,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        card_store: Arc<dyn CardStore>,
        users: Arc<dyn CredentialStore>,
    ) -> Self {
        let ttl = config.security.jwt_ttl().unwrap_or_else(|| Duration::hours(1));
        let tokens = TokenService::new(&config.security.jwt_secret, ttl);
        Self {
            cards: CardService::new(card_store),
            users,
            tokens,
            config,
        }
    }

    /// File-backed stores at the configured paths
    pub fn from_config(config: AppConfig) -> Self {
        let card_store = Arc::new(JsonFileCardStore::new(config.storage.cards_file.clone()));
        let users = Arc::new(JsonFileUsers::new(config.storage.users_file.clone()));
        Self::new(config, card_store, users)
    }
}
