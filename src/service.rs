//! Deck lifecycle: create, open and draw.
//!
//! Each operation reads the store, runs the pure engine functions and writes
//! the result back. There is no locking between the read and the write, so
//! concurrent draws on one deck resolve last-writer-wins.

use crate::engine::{self, RandomSource};
use crate::models::{Cards, Deck};
use crate::store::DeckStore;
use crate::{DeckError, ErrorKind, Result};
use std::sync::Arc;

#[derive(Clone)]
pub struct DeckService {
    store: Arc<dyn DeckStore>,
    random: RandomSource,
}

impl DeckService {
    pub fn new(store: Arc<dyn DeckStore>, random: RandomSource) -> Self {
        Self { store, random }
    }

    /// Create and persist a new deck.
    ///
    /// An empty `cards` list means the full default deck.
    pub async fn create(&self, cards: Vec<String>, is_shuffled: bool) -> Result<Deck> {
        if !engine::is_valid_codes(&cards) {
            return Err(DeckError::invalid_input("given cards is not valid"));
        }

        let mut codes = if cards.is_empty() {
            engine::create_default_codes()
        } else {
            cards
        };

        if is_shuffled {
            engine::shuffle(&mut self.random.rng(), &mut codes);
        }

        let deck = Deck::new(codes, is_shuffled);
        if let Err(e) = self.store.insert(&deck).await {
            tracing::error!(error = %e, "failed to store new deck");
            return Err(DeckError::internal("failed store new deck"));
        }

        tracing::info!(
            deck_id = %deck.deck_id(),
            remaining = deck.remaining(),
            is_shuffled,
            "deck created"
        );
        Ok(deck)
    }

    /// Fetch a deck with its remaining cards expanded
    pub async fn open(&self, deck_id: &str) -> Result<Deck> {
        let deck = self.fetch(deck_id).await?;

        let cards = engine::build_cards_from_codes(deck.card_codes()).map_err(|e| {
            tracing::error!(deck_id = %deck_id, error = %e, "stored deck holds invalid codes");
            DeckError::internal("failed map codes to cards")
        })?;

        Ok(deck.with_cards(cards))
    }

    /// Draw up to `count` random cards from a deck.
    ///
    /// Asking for more than remain draws whatever is left. An empty deck
    /// is rejected regardless of `count`.
    pub async fn draw(&self, deck_id: &str, count: u32) -> Result<Cards> {
        let mut deck = self.fetch(deck_id).await?;

        if deck.remaining() == 0 {
            return Err(DeckError::invalid_input("deck remaining 0 cards"));
        }
        let count = count.min(deck.remaining());

        let drawn = engine::draw_random_n(&mut self.random.rng(), count as usize, deck.card_codes())
            .map_err(|e| {
                tracing::error!(deck_id = %deck_id, error = %e, "draw failed");
                DeckError::internal("failed draw cards from deck")
            })?;

        let cards = engine::build_cards_from_codes(&drawn).map_err(|e| {
            tracing::error!(deck_id = %deck_id, error = %e, "drawn codes failed to map");
            DeckError::internal("failed map codes to cards")
        })?;

        let left = engine::remove_drawn(&drawn, deck.card_codes());
        deck.replace_codes(left);

        if let Err(e) = self.store.update(&deck).await {
            tracing::error!(deck_id = %deck_id, error = %e, "failed to persist draw");
            return Err(DeckError::internal("failed draw cards"));
        }

        tracing::info!(
            deck_id = %deck_id,
            drawn = cards.len(),
            remaining = deck.remaining(),
            "cards drawn"
        );
        Ok(cards)
    }

    /// Load a deck, keeping NotFound and collapsing other failures to Internal
    async fn fetch(&self, deck_id: &str) -> Result<Deck> {
        match self.store.get_by_id(deck_id).await {
            Ok(deck) => Ok(deck),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(DeckError::not_found("deck not found")),
            Err(e) => {
                tracing::error!(deck_id = %deck_id, error = %e, "failed to load deck");
                Err(DeckError::internal("failed load deck"))
            }
        }
    }
}
