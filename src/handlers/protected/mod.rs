// handlers/protected/mod.rs - Handlers behind the JWT middleware
//
// Every route here sees an `AuthUser` in request extensions. No per-user
// authorization is applied; the username is only recorded in logs.

pub mod cards;

pub use cards::{create as cards_create, delete as cards_delete, update as cards_update};
