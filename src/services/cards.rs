//! Card collection rules over a `CardStore`.
//!
//! Each mutation is a separate load, compute, save sequence against the
//! store. Nothing serializes concurrent mutations.

use std::sync::Arc;

use rand::seq::SliceRandom;
use serde_json::Value;
use thiserror::Error;

use crate::store::{CardStore, StoreError};
use crate::types::{Card, CatalogField, CARD_ID_FIELD};

#[derive(Debug, Error)]
pub enum CardError {
    #[error("{0}")]
    DuplicateKey(&'static str),

    #[error("Card not found")]
    NotFound(String),

    #[error("No cards available")]
    Empty,

    #[error("{0}")]
    InvalidPayload(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

const NOT_AN_OBJECT: &str = "Card payload must be a JSON object";
const BAD_CARD_ID: &str = "cardId is required and must be a string";

#[derive(Clone)]
pub struct CardService {
    store: Arc<dyn CardStore>,
}

impl CardService {
    pub fn new(store: Arc<dyn CardStore>) -> Self {
        Self { store }
    }

    /// Cards whose fields equal every `(field, value)` pair, in stored order
    pub async fn list(&self, filters: &[(String, String)]) -> Result<Vec<Card>, CardError> {
        let cards = self.store.load_all().await?;
        Ok(cards
            .into_iter()
            .filter(|card| filters.iter().all(|(field, value)| card.field_equals(field, value)))
            .collect())
    }

    pub async fn create(&self, payload: Value) -> Result<Card, CardError> {
        let card = Card::try_from(payload).map_err(|_| CardError::InvalidPayload(NOT_AN_OBJECT))?;
        let card_id = card
            .card_id()
            .ok_or(CardError::InvalidPayload(BAD_CARD_ID))?
            .to_string();

        let mut cards = self.store.load_all().await?;
        if cards.iter().any(|c| c.card_id() == Some(card_id.as_str())) {
            return Err(CardError::DuplicateKey("Card ID must be unique"));
        }

        cards.push(card.clone());
        self.store.save_all(&cards).await?;
        Ok(card)
    }

    /// Shallow-merge `payload` into the card whose `cardId` is `id`
    pub async fn update(&self, id: &str, payload: Value) -> Result<Card, CardError> {
        let patch = Card::try_from(payload).map_err(|_| CardError::InvalidPayload(NOT_AN_OBJECT))?;
        let new_id = match patch.get(CARD_ID_FIELD) {
            None => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => return Err(CardError::InvalidPayload(BAD_CARD_ID)),
        };

        let mut cards = self.store.load_all().await?;
        let index = position_of(&cards, id).ok_or_else(|| CardError::NotFound(id.to_string()))?;

        if let Some(new_id) = new_id {
            if new_id != id && cards.iter().any(|c| c.card_id() == Some(new_id)) {
                return Err(CardError::DuplicateKey("New card ID must be unique"));
            }
        }

        cards[index].merge(&patch);
        let updated = cards[index].clone();
        self.store.save_all(&cards).await?;
        Ok(updated)
    }

    /// Remove the first card whose `cardId` is `id`
    pub async fn delete(&self, id: &str) -> Result<Card, CardError> {
        let mut cards = self.store.load_all().await?;
        let index = position_of(&cards, id).ok_or_else(|| CardError::NotFound(id.to_string()))?;

        let removed = cards.remove(index);
        self.store.save_all(&cards).await?;
        Ok(removed)
    }

    /// Distinct values of `field` in first-occurrence order. Cards without
    /// the field contribute nothing.
    pub async fn distinct(&self, field: CatalogField) -> Result<Vec<Value>, CardError> {
        let cards = self.store.load_all().await?;
        let mut values: Vec<Value> = Vec::new();
        for value in cards.iter().filter_map(|c| c.get(field.field_name())) {
            if !values.contains(value) {
                values.push(value.clone());
            }
        }
        Ok(values)
    }

    pub async fn count(&self) -> Result<usize, CardError> {
        Ok(self.store.load_all().await?.len())
    }

    pub async fn random(&self) -> Result<Card, CardError> {
        let cards = self.store.load_all().await?;
        cards
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(CardError::Empty)
    }
}

fn position_of(cards: &[Card], id: &str) -> Option<usize> {
    cards.iter().position(|c| c.card_id() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryCardStore;
    use serde_json::json;

    fn service(cards: Value) -> CardService {
        let cards: Vec<Card> = serde_json::from_value(cards).unwrap();
        CardService::new(Arc::new(InMemoryCardStore::new(cards)))
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().filter_map(Card::card_id).collect()
    }

    fn filters(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn list_filters_on_every_pair() {
        let svc = service(json!([
            {"cardId": "1", "set": "Foo", "type": "Bar"},
            {"cardId": "2", "set": "Foo", "type": "Baz"},
            {"cardId": "3", "set": "Qux", "type": "Bar"},
            {"cardId": "4", "type": "Bar"},
            {"cardId": "5", "set": "Foo", "type": "Bar"}
        ]));

        let all = svc.list(&[]).await.unwrap();
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5"]);

        let matched = svc.list(&filters(&[("set", "Foo"), ("type", "Bar")])).await.unwrap();
        assert_eq!(ids(&matched), vec!["1", "5"]);

        let none = svc.list(&filters(&[("set", "Foo"), ("set", "Qux")])).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn create_rejects_duplicate_and_leaves_collection_alone() {
        let svc = service(json!([{"cardId": "1", "set": "A"}]));

        let err = svc.create(json!({"cardId": "1", "set": "Z"})).await.unwrap_err();
        assert!(matches!(err, CardError::DuplicateKey("Card ID must be unique")));
        assert_eq!(svc.count().await.unwrap(), 1);

        let created = svc.create(json!({"cardId": "2", "set": "B"})).await.unwrap();
        assert_eq!(created.card_id(), Some("2"));
        assert_eq!(ids(&svc.list(&[]).await.unwrap()), vec!["1", "2"]);
    }

    #[tokio::test]
    async fn create_requires_object_with_string_id() {
        let svc = service(json!([]));

        assert!(matches!(
            svc.create(json!([1, 2])).await,
            Err(CardError::InvalidPayload(NOT_AN_OBJECT))
        ));
        assert!(matches!(
            svc.create(json!({"set": "A"})).await,
            Err(CardError::InvalidPayload(BAD_CARD_ID))
        ));
        assert!(matches!(
            svc.create(json!({"cardId": 3})).await,
            Err(CardError::InvalidPayload(BAD_CARD_ID))
        ));
    }

    #[tokio::test]
    async fn update_merges_supplied_fields_only() {
        let svc = service(json!([{"cardId": "1", "set": "A", "rarity": "Common", "type": "Fire"}]));

        let updated = svc.update("1", json!({"rarity": "Rare"})).await.unwrap();
        assert_eq!(
            updated.clone().into_value(),
            json!({"cardId": "1", "set": "A", "rarity": "Rare", "type": "Fire"})
        );
        assert_eq!(svc.list(&[]).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn update_checks_new_id_uniqueness() {
        let svc = service(json!([{"cardId": "1"}, {"cardId": "2"}]));

        let err = svc.update("1", json!({"cardId": "2"})).await.unwrap_err();
        assert!(matches!(err, CardError::DuplicateKey("New card ID must be unique")));

        // Restating its own id is not a collision
        assert!(svc.update("1", json!({"cardId": "1", "hp": 10})).await.is_ok());

        let renamed = svc.update("1", json!({"cardId": "9"})).await.unwrap();
        assert_eq!(renamed.card_id(), Some("9"));
        assert_eq!(ids(&svc.list(&[]).await.unwrap()), vec!["9", "2"]);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_cards() {
        let svc = service(json!([{"cardId": "1"}]));

        assert!(matches!(
            svc.update("7", json!({})).await,
            Err(CardError::NotFound(id)) if id == "7"
        ));
        assert!(matches!(svc.delete("7").await, Err(CardError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_first_match() {
        let svc = service(json!([
            {"cardId": "1", "n": 1},
            {"cardId": "2"},
            {"cardId": "1", "n": 2}
        ]));

        let removed = svc.delete("1").await.unwrap();
        assert_eq!(removed.get("n"), Some(&json!(1)));

        let remaining = svc.list(&[]).await.unwrap();
        assert_eq!(ids(&remaining), vec!["2", "1"]);
    }

    #[tokio::test]
    async fn distinct_values_keep_first_occurrence_order() {
        let svc = service(json!([
            {"cardId": "1", "set": "B", "rarity": "Rare"},
            {"cardId": "2", "set": "A"},
            {"cardId": "3", "set": "B", "rarity": "Common"},
            {"cardId": "4", "set": "A", "rarity": "Rare"}
        ]));

        assert_eq!(svc.distinct(CatalogField::Set).await.unwrap(), vec![json!("B"), json!("A")]);
        assert_eq!(
            svc.distinct(CatalogField::Rarity).await.unwrap(),
            vec![json!("Rare"), json!("Common")]
        );
        assert!(svc.distinct(CatalogField::Type).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn random_picks_a_stored_card_or_reports_empty() {
        let svc = service(json!([{"cardId": "1"}, {"cardId": "2"}, {"cardId": "3"}]));
        for _ in 0..20 {
            let card = svc.random().await.unwrap();
            assert!(matches!(card.card_id(), Some("1" | "2" | "3")));
        }

        let empty = service(json!([]));
        assert!(matches!(empty.random().await, Err(CardError::Empty)));
    }
}
