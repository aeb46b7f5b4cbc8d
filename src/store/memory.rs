use super::DeckStore;
use crate::models::Deck;
use crate::{DeckError, Result};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-process deck store, lost on restart
#[derive(Debug, Default)]
pub struct MemoryDeckStore {
    decks: DashMap<String, Deck>,
}

impl MemoryDeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }
}

#[async_trait]
impl DeckStore for MemoryDeckStore {
    async fn insert(&self, deck: &Deck) -> Result<()> {
        match self.decks.entry(deck.deck_id().to_string()) {
            Entry::Occupied(_) => {
                return Err(DeckError::internal(format!(
                    "deck {} already exists",
                    deck.deck_id()
                )))
            }
            Entry::Vacant(slot) => {
                slot.insert(deck.clone());
            }
        }
        tracing::debug!(deck_id = %deck.deck_id(), "deck inserted");
        Ok(())
    }

    async fn get_by_id(&self, deck_id: &str) -> Result<Deck> {
        self.decks
            .get(deck_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| DeckError::not_found("deck not found"))
    }

    async fn update(&self, deck: &Deck) -> Result<()> {
        let mut stored = self
            .decks
            .get_mut(deck.deck_id())
            .ok_or_else(|| DeckError::not_found("deck not found"))?;
        stored.overwrite_from(deck);
        tracing::debug!(deck_id = %deck.deck_id(), remaining = deck.remaining(), "deck updated");
        Ok(())
    }
}
