use super::{migrations, DeckStore};
use crate::models::Deck;
use crate::{DeckError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Deck store backed by a SQLite database file.
///
/// Statements run on tokio's blocking pool. The connection sits behind a
/// mutex, so writes to the same database are serialized by SQLite anyway.
#[derive(Clone, Debug)]
pub struct SqliteDeckStore {
    conn: Arc<Mutex<Connection>>,
    path: PathBuf,
}

impl SqliteDeckStore {
    /// Open (or create) the database at `path` and apply pending migrations.
    ///
    /// `:memory:` opens a private in-memory database.
    pub fn open(path: impl AsRef<Path>, busy_timeout: Duration) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut conn = if path == Path::new(":memory:") {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let conn = Connection::open(&path)?;
            conn.pragma_update(None, "journal_mode", "WAL")?;
            conn
        };
        conn.busy_timeout(busy_timeout)?;

        let applied = migrations::migrate_up(&mut conn)?;
        tracing::info!(path = %path.display(), migrations = applied, "deck database ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against the connection on the blocking pool
    async fn with_conn<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .map_err(|_| DeckError::internal("deck database lock poisoned"))?;
            f(&conn)
        })
        .await
        .map_err(|e| DeckError::internal(format!("database task failed: {}", e)))?
    }
}

struct DeckRow {
    deck_id: String,
    is_shuffled: bool,
    remaining: u32,
    card_codes: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DeckRow {
    fn into_deck(self) -> Result<Deck> {
        let codes: Vec<String> = serde_json::from_str(&self.card_codes)?;
        if codes.len() != self.remaining as usize {
            return Err(DeckError::internal(format!(
                "deck {} is corrupted: remaining {} but {} codes stored",
                self.deck_id,
                self.remaining,
                codes.len()
            )));
        }
        Ok(Deck::restore(
            self.deck_id,
            self.is_shuffled,
            codes,
            self.created_at,
            self.updated_at,
        ))
    }
}

#[async_trait]
impl DeckStore for SqliteDeckStore {
    async fn insert(&self, deck: &Deck) -> Result<()> {
        let deck_id = deck.deck_id().to_string();
        let is_shuffled = deck.is_shuffled();
        let remaining = deck.card_codes().len() as u32;
        let card_codes = serde_json::to_string(deck.card_codes())?;
        let created_at = deck.created_at();
        let updated_at = deck.updated_at();

        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO decks (deck_id, is_shuffled, remaining, card_codes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![deck_id, is_shuffled, remaining, card_codes, created_at, updated_at],
            )?;
            tracing::debug!(deck_id = %deck_id, remaining, "deck inserted");
            Ok(())
        })
        .await
    }

    async fn get_by_id(&self, deck_id: &str) -> Result<Deck> {
        let deck_id = deck_id.to_string();

        let row = self
            .with_conn(move |conn| {
                Ok(conn
                    .query_row(
                        "SELECT deck_id, is_shuffled, remaining, card_codes, created_at, updated_at
                         FROM decks WHERE deck_id = ?1",
                        params![deck_id],
                        |row| {
                            Ok(DeckRow {
                                deck_id: row.get(0)?,
                                is_shuffled: row.get(1)?,
                                remaining: row.get(2)?,
                                card_codes: row.get(3)?,
                                created_at: row.get(4)?,
                                updated_at: row.get(5)?,
                            })
                        },
                    )
                    .optional()?)
            })
            .await?;

        row.ok_or_else(|| DeckError::not_found("deck not found"))?
            .into_deck()
    }

    async fn update(&self, deck: &Deck) -> Result<()> {
        let deck_id = deck.deck_id().to_string();
        let remaining = deck.card_codes().len() as u32;
        let card_codes = serde_json::to_string(deck.card_codes())?;
        let updated_at = deck.updated_at();

        self.with_conn(move |conn| {
            let changed = conn.execute(
                "UPDATE decks SET remaining = ?1, card_codes = ?2, updated_at = ?3 WHERE deck_id = ?4",
                params![remaining, card_codes, updated_at, deck_id],
            )?;
            if changed == 0 {
                return Err(DeckError::not_found("deck not found"));
            }
            tracing::debug!(deck_id = %deck_id, remaining, "deck updated");
            Ok(())
        })
        .await
    }
}
