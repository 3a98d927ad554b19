// handlers/public/mod.rs - Handlers that do not require authentication

pub mod cards;
pub mod catalog;
pub mod token;

pub use cards::{count as cards_count, list as cards_list, random as cards_random};
pub use catalog::{rarities, sets, types};
pub use token::get_token;

/// GET / - liveness message
pub async fn root() -> &'static str {
    "🎴 Card Game API is running! Try /cards or /getToken"
}
