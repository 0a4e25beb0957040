use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Foreground/background pair a card is drawn with.
/// Each colour is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayColors {
    pub background: String,
    pub foreground: String,
}

impl Default for DisplayColors {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#000000".to_string(),
        }
    }
}

/// One card of the carousel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardItem {
    /// Image location shown at the top of the card
    pub image_source: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub colors: DisplayColors,
}

impl CardItem {
    /// Date in long US form, e.g. "March 5, 2020"
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Ordered, non-empty sequence of cards, fixed for a session
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub(super) cards: Vec<CardItem>,
}

impl Deck {
    /// Build a deck, rejecting an empty card list
    pub fn new(cards: Vec<CardItem>) -> crate::Result<Self> {
        if cards.is_empty() {
            return Err(crate::Error::EmptyDeck);
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[CardItem] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.cards.get(index)
    }

    /// Number of cards (always at least 1)
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for API symmetry with slices
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.cards.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str) -> CardItem {
        CardItem {
            image_source: "img.png".to_string(),
            title: title.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2020, 3, 5).unwrap(),
            colors: DisplayColors::default(),
        }
    }

    #[test]
    fn test_empty_deck_rejected() {
        assert!(matches!(Deck::new(Vec::new()), Err(crate::Error::EmptyDeck)));
    }

    #[test]
    fn test_last_index() {
        let deck = Deck::new(vec![card("a"), card("b"), card("c")]).unwrap();
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.last_index(), 2);
        assert_eq!(deck.get(1).map(|c| c.title.as_str()), Some("b"));
    }

    #[test]
    fn test_display_date() {
        assert_eq!(card("a").display_date(), "March 5, 2020");
    }
}
