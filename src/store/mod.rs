//! Record and credential storage.
//!
//! Every call reads or rewrites the whole backing document. There is no
//! locking between `load_all` and `save_all`, so two overlapping
//! read-modify-write cycles can lose an update (last write wins). Swapping
//! in a transactional store only requires another `CardStore` impl.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{Card, Credential};

pub mod file;
pub mod memory;

pub use file::{JsonFileCardStore, JsonFileUsers};
pub use memory::{InMemoryCardStore, InMemoryUsers};

/// Errors from reading or writing a backing document
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Full-collection card persistence
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Read and parse the entire collection, in insertion order
    async fn load_all(&self) -> Result<Vec<Card>, StoreError>;

    /// Replace the entire collection
    async fn save_all(&self, cards: &[Card]) -> Result<(), StoreError>;
}

/// Source of username/password records for token issuance
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load_users(&self) -> Result<Vec<Credential>, StoreError>;
}
