//! Deck persistence.
//!
//! Stores are plain read/write: no optimistic locking, last writer wins.

pub mod memory;
pub mod migrations;
pub mod sqlite;

pub use memory::MemoryDeckStore;
pub use sqlite::SqliteDeckStore;

use crate::models::Deck;
use crate::Result;
use async_trait::async_trait;

/// Durable storage of deck records keyed by deck id
#[async_trait]
pub trait DeckStore: Send + Sync {
    /// Store a new deck
    async fn insert(&self, deck: &Deck) -> Result<()>;

    /// Fetch a deck, `DeckError::NotFound` when the id is unknown
    async fn get_by_id(&self, deck_id: &str) -> Result<Deck>;

    /// Overwrite the codes, remaining count and update time of an existing deck
    async fn update(&self, deck: &Deck) -> Result<()>;
}
