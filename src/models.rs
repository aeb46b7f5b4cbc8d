use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single playing card as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Rank name, e.g. `ACE`, `10`, `KING`
    pub value: String,
    /// Suit name, e.g. `SPADES`
    pub suit: String,
    /// Canonical code, e.g. `AS`, `10C`
    pub code: String,
}

pub type Cards = Vec<Card>;

/// The persisted deck record.
///
/// `remaining` always equals the number of held card codes; every mutator
/// keeps the two in sync. Card codes never appear in the serialized form;
/// `cards` is only present when the deck has been opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Deck {
    deck_id: String,
    is_shuffled: bool,
    remaining: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    cards: Option<Cards>,
    #[serde(skip)]
    card_codes: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Deck {
    /// Create a new deck with a fresh id and timestamps
    pub fn new(card_codes: Vec<String>, is_shuffled: bool) -> Self {
        let now = Utc::now();
        Self {
            deck_id: Uuid::new_v4().to_string(),
            is_shuffled,
            remaining: card_codes.len() as u32,
            cards: None,
            card_codes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a deck from stored fields. `remaining` is derived from the codes.
    pub fn restore(
        deck_id: String,
        is_shuffled: bool,
        card_codes: Vec<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            deck_id,
            is_shuffled,
            remaining: card_codes.len() as u32,
            cards: None,
            card_codes,
            created_at,
            updated_at,
        }
    }

    pub fn deck_id(&self) -> &str {
        &self.deck_id
    }

    pub fn is_shuffled(&self) -> bool {
        self.is_shuffled
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn card_codes(&self) -> &[String] {
        &self.card_codes
    }

    pub fn cards(&self) -> Option<&[Card]> {
        self.cards.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the held codes, recomputing `remaining` and refreshing `updated_at`
    pub fn replace_codes(&mut self, card_codes: Vec<String>) {
        self.remaining = card_codes.len() as u32;
        self.card_codes = card_codes;
        self.updated_at = Utc::now();
    }

    /// Copy the mutable part of `other` (codes, remaining, update time).
    pub(crate) fn overwrite_from(&mut self, other: &Deck) {
        self.card_codes = other.card_codes.clone();
        self.remaining = other.remaining;
        self.updated_at = other.updated_at;
    }

    /// Attach expanded cards for the external representation
    pub fn with_cards(mut self, cards: Cards) -> Self {
        self.cards = Some(cards);
        self
    }
}
