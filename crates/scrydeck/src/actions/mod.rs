//! Action modules for Scryfall operations.

mod cards;

pub use cards::{COLLECTION_MAX, CardActions};
