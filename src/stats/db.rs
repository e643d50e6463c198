//! SQLite snapshot backend
//!
//! Stores each named snapshot as one row of the `snapshots` table.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension};

use super::store::{SnapshotBackend, StoreResult};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS snapshots (
    name TEXT PRIMARY KEY,
    body TEXT NOT NULL,
    updated_at INTEGER NOT NULL
);
"#;

/// Snapshot rows in a SQLite database
pub struct SqliteBackend {
    conn: Mutex<Connection>,
    name: String,
    location: String,
}

impl SqliteBackend {
    /// Open or create the database at `path`, storing the record `name`
    pub fn open(path: &Path, name: &str) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Self::with_connection(conn, name, path.display().to_string())
    }

    fn with_connection(conn: Connection, name: &str, location: String) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            conn: Mutex::new(conn),
            name: name.to_string(),
            location,
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotBackend for SqliteBackend {
    fn read(&self) -> StoreResult<Option<String>> {
        let body = self
            .conn()
            .query_row(
                "SELECT body FROM snapshots WHERE name = ?1",
                [&self.name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(body)
    }

    fn write(&self, body: &str) -> StoreResult<()> {
        self.conn().execute(
            r#"
            INSERT INTO snapshots (name, body, updated_at) VALUES (?1, ?2, ?3)
            ON CONFLICT(name) DO UPDATE SET body = ?2, updated_at = ?3
            "#,
            (&self.name, body, Utc::now().timestamp_millis()),
        )?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("{}#{}", self.location, self.name)
    }
}
