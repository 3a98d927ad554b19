use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{CardStore, CredentialStore, StoreError};
use crate::types::{Card, Credential};

/// Cards persisted as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonFileCardStore {
    path: PathBuf,
}

impl JsonFileCardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CardStore for JsonFileCardStore {
    async fn load_all(&self) -> Result<Vec<Card>, StoreError> {
        read_json_array(&self.path).await
    }

    async fn save_all(&self, cards: &[Card]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(cards)?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = cards.len(), "cards file rewritten");
        Ok(())
    }
}

/// Credentials read from a JSON array of `{username, password}`
#[derive(Debug, Clone)]
pub struct JsonFileUsers {
    path: PathBuf,
}

impl JsonFileUsers {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStore for JsonFileUsers {
    async fn load_users(&self) -> Result<Vec<Credential>, StoreError> {
        read_json_array(&self.path).await
    }
}

async fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    serde_json::from_slice(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_then_load_keeps_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCardStore::new(dir.path().join("cards.json"));

        let cards: Vec<Card> = serde_json::from_value(json!([
            {"cardId": "2", "set": "B", "hp": 40},
            {"cardId": "1", "set": "A"}
        ]))
        .unwrap();

        store.save_all(&cards).await.unwrap();
        let loaded = store.load_all().await.unwrap();
        assert_eq!(loaded, cards);

        let on_disk = std::fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("\n  {"), "expected 2-space pretty print: {on_disk}");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCardStore::new(dir.path().join("absent.json"));

        let err = store.load_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn non_array_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        std::fs::write(&path, r#"{"cardId": "1"}"#).unwrap();

        let err = JsonFileCardStore::new(&path).load_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn users_file_loads_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, r#"[{"username": "ash", "password": "pikachu"}]"#).unwrap();

        let users = JsonFileUsers::new(&path).load_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "ash");
        assert_eq!(users[0].password, "pikachu");
    }
}
