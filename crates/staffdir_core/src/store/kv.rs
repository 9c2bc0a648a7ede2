//! Durable local storage under a single named key.
//!
//! # Responsibility
//! - Hold the JSON-serialized collection in one `kv` row.
//! - Read the row at startup, overwrite it after every mutation.
//!
//! # Invariants
//! - The connection must have migrations fully applied before this store
//!   accepts it.
//! - There is no delta persistence; every write replaces the whole
//!   snapshot.

use crate::db::migrations::latest_version;
use crate::model::employee::Employee;
use crate::store::{BackingStore, Mutation, PersistResult, PersistenceError};
use log::debug;
use rusqlite::Connection;

/// Key under which the employee collection is stored by default.
pub const DEFAULT_COLLECTION_KEY: &str = "employees";

/// SQLite-backed named-key store, the durable local storage variant.
pub struct SqliteKvStore {
    conn: Connection,
    key: String,
}

impl SqliteKvStore {
    /// Wraps a migrated connection, storing the collection under `key`.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the connection's schema version does
    ///   not match the latest migration known to this binary.
    /// - `MissingRequiredTable` when the `kv` table is absent.
    pub fn try_new(conn: Connection, key: impl Into<String>) -> PersistResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(PersistenceError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'kv'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_exists == 0 {
            return Err(PersistenceError::MissingRequiredTable("kv"));
        }

        Ok(Self {
            conn,
            key: key.into(),
        })
    }
}

impl BackingStore for SqliteKvStore {
    fn backend_id(&self) -> &'static str {
        "local_kv"
    }

    fn load(&self) -> PersistResult<Option<Vec<Employee>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM kv WHERE key = ?1;")?;
        let mut rows = stmt.query([self.key.as_str()])?;

        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        let raw: String = row.get(0)?;
        let records: Vec<Employee> = serde_json::from_str(&raw)?;
        Ok(Some(records))
    }

    fn persist(&self, mutation: Mutation<'_>, snapshot: &[Employee]) -> PersistResult<()> {
        let value = serde_json::to_string(snapshot)?;

        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            rusqlite::params![self.key.as_str(), value],
        )?;

        debug!(
            "event=kv_write module=store key={} op={} bytes={}",
            self.key,
            mutation.operation(),
            value.len()
        );
        Ok(())
    }
}
