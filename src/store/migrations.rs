//! Schema migrations for the SQLite deck store.
//!
//! Applied versions are tracked in `PRAGMA user_version`. Each migration runs
//! in its own transaction; a database already at the latest version is left
//! untouched.

use crate::Result;
use rusqlite::Connection;

/// Ordered migrations; the schema version after applying `MIGRATIONS[i]` is `i + 1`.
const MIGRATIONS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS decks (
        deck_id     TEXT PRIMARY KEY,
        is_shuffled INTEGER NOT NULL DEFAULT 0,
        remaining   INTEGER NOT NULL,
        card_codes  TEXT NOT NULL,
        created_at  TEXT NOT NULL,
        updated_at  TEXT NOT NULL
    )",
];

/// Latest schema version known to this build
pub fn latest_version() -> u32 {
    MIGRATIONS.len() as u32
}

pub fn current_version(conn: &Connection) -> Result<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Bring the schema up to date, returning how many migrations ran
pub fn migrate_up(conn: &mut Connection) -> Result<usize> {
    let current = current_version(conn)?;
    if current > latest_version() {
        return Err(crate::DeckError::internal(format!(
            "database schema version {} is newer than supported version {}",
            current,
            latest_version()
        )));
    }

    let mut applied = 0;
    for (index, sql) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        let version = index as u32 + 1;
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        tx.commit()?;

        tracing::info!(version, "applied schema migration");
        applied += 1;
    }

    Ok(applied)
}
