// Response bodies for the card API. Field names follow the public
// camelCase contract (`successMessage`, `createdCard`, ...).

use serde::Serialize;

use crate::types::Card;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenIssued {
    pub success_message: &'static str,
    pub token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCreated {
    pub success_message: &'static str,
    pub created_card: Card,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdated {
    pub success_message: &'static str,
    pub updated_card: Card,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDeleted {
    pub success_message: &'static str,
    pub deleted_card: Card,
}

#[derive(Debug, Serialize)]
pub struct CardCount {
    pub count: usize,
}

impl TokenIssued {
    pub fn new(token: String) -> Self {
        Self {
            success_message: "Token created",
            token,
        }
    }
}

impl CardCreated {
    pub fn new(card: Card) -> Self {
        Self {
            success_message: "Card created successfully",
            created_card: card,
        }
    }
}

impl CardUpdated {
    pub fn new(card: Card) -> Self {
        Self {
            success_message: "Card updated",
            updated_card: card,
        }
    }
}

impl CardDeleted {
    pub fn new(card: Card) -> Self {
        Self {
            success_message: "Card deleted",
            deleted_card: card,
        }
    }
}
