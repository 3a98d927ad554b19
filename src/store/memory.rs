use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CardStore, CredentialStore, StoreError};
use crate::types::{Card, Credential};

/// Card store held in process memory. Same replace-on-write contract as the
/// file store: the lock guards each single call, not a load/save pair.
#[derive(Debug, Default)]
pub struct InMemoryCardStore {
    cards: RwLock<Vec<Card>>,
}

impl InMemoryCardStore {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn load_all(&self) -> Result<Vec<Card>, StoreError> {
        Ok(self.cards.read().await.clone())
    }

    async fn save_all(&self, cards: &[Card]) -> Result<(), StoreError> {
        *self.cards.write().await = cards.to_vec();
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryUsers {
    users: Vec<Credential>,
}

impl InMemoryUsers {
    pub fn new(users: Vec<Credential>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialStore for InMemoryUsers {
    async fn load_users(&self) -> Result<Vec<Credential>, StoreError> {
        Ok(self.users.clone())
    }
}
