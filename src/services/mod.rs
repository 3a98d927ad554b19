pub mod cards;

pub use cards::{CardError, CardService};
