/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifying field every card carries
pub const CARD_ID_FIELD: &str = "cardId";

/// A single trading card.
///
/// Cards are open-ended JSON objects: only `cardId` has meaning to the
/// service, every other field (`set`, `type`, `rarity`, ...) is stored as
/// received. Field order is preserved through load and save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Card(pub Map<String, Value>);

impl Card {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The card's `cardId` when it is a string
    pub fn card_id(&self) -> Option<&str> {
        self.0.get(CARD_ID_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Shallow merge: every field in `patch` overwrites the same-named field
    /// here, all other fields are retained.
    pub fn merge(&mut self, patch: &Card) {
        for (key, value) in &patch.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Exact string equality against a field, as used by query filtering
    pub fn field_equals(&self, field: &str, expected: &str) -> bool {
        matches!(self.0.get(field), Some(Value::String(actual)) if actual == expected)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl TryFrom<Value> for Card {
    type Error = Value;

    /// Only JSON objects are cards; anything else is handed back
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Card(map)),
            other => Err(other),
        }
    }
}

/// Entry of the users file. Passwords are stored and compared in plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

/// Card fields that have a distinct-values endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogField {
    Set,
    Type,
    Rarity,
}

impl CatalogField {
    pub fn field_name(self) -> &'static str {
        match self {
            CatalogField::Set => "set",
            CatalogField::Type => "type",
            CatalogField::Rarity => "rarity",
        }
    }
}
