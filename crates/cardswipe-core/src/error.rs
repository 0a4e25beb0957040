use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Deck has no cards")]
    EmptyDeck,

    #[error("Invalid deck: {0}")]
    Deck(String),
}

pub type Result<T> = std::result::Result<T, Error>;
