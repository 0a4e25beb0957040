mod loader;
mod models;

pub use models::{CardItem, Deck, DisplayColors};
