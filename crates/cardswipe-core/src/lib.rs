pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;

pub use carousel::{Carousel, Outcome};
pub use config::{AppConfig, CarouselConfig, EasingType, ScrollConfig};
pub use deck::{CardItem, Deck};
pub use error::{Error, Result};
