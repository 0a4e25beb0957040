use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use super::models::{CardItem, Deck, DisplayColors};
use crate::{Error, Result};

/// On-disk deck document: `{ "cards": [...] }` / `[[cards]]`
#[derive(Debug, Deserialize)]
struct DeckFile {
    cards: Vec<CardItem>,
}

impl Deck {
    /// Load a deck from a `.json` or `.toml` file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(Error::Deck(format!(
                    "unsupported deck format {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                )))
            }
        };
        debug!("Loaded {} cards from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Parse a JSON deck: either a bare array of cards or `{ "cards": [...] }`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        let cards: Vec<CardItem> = if value.is_array() {
            serde_json::from_value(value)?
        } else {
            serde_json::from_value::<DeckFile>(value)?.cards
        };
        Self::new(cards)
    }

    /// Parse a TOML deck made of `[[cards]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DeckFile = toml::from_str(content)?;
        Self::new(file.cards)
    }

    /// Built-in five card deck used when no deck file is configured
    pub fn sample() -> Self {
        let entries = [
            ("Sunrise", "Morning light over the harbour.", (2020, 3, 5), "#f4d35e", "#0d3b66"),
            ("Forest", "A walk under tall pines.", (2020, 4, 12), "#2a9d8f", "#ffffff"),
            ("Desert", "Dunes shaped by the evening wind.", (2020, 6, 21), "#e76f51", "#1d3557"),
            ("Glacier", "Blue ice at the edge of the fjord.", (2020, 9, 2), "#a8dadc", "#1d3557"),
            ("City", "Neon reflections after the rain.", (2020, 11, 30), "#264653", "#e9c46a"),
        ];

        let cards = entries
            .iter()
            .enumerate()
            .map(|(i, (title, desc, (y, m, d), bg, fg))| CardItem {
                image_source: format!("images/sample-{}.jpg", i + 1),
                title: title.to_string(),
                description: desc.to_string(),
                date: NaiveDate::from_ymd_opt(*y, *m, *d).unwrap_or_default(),
                colors: DisplayColors {
                    background: bg.to_string(),
                    foreground: fg.to_string(),
                },
            })
            .collect();

        Self { cards }
    }
}
