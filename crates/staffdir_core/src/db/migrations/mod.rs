//! Schema migration registry for the key-value substrate.
//!
//! # Responsibility
//! - Declare schema steps in strictly increasing version order.
//! - Apply whatever is pending, one transaction per step.
//!
//! # Invariants
//! - The applied version is mirrored into `PRAGMA user_version`.
//! - A database stamped newer than this build is refused, never downgraded.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct Migration {
    version: u32,
    label: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    label: "kv_substrate",
    sql: include_str!("0001_init.sql"),
}];

/// Latest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies every migration newer than the database's stamped version.
///
/// Each step runs in its own transaction and stamps `PRAGMA user_version`
/// before committing, so an interrupted run resumes at the failed step.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stamped: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();

    if stamped > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            found: stamped,
            supported: latest,
        });
    }

    for migration in MIGRATIONS.iter().filter(|step| step.version > stamped) {
        let tx = conn.transaction()?;
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
        tx.commit()?;

        info!(
            "event=db_migrate module=db status=ok version={} label={}",
            migration.version, migration.label
        );
    }

    Ok(())
}
