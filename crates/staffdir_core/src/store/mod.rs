//! Backing-store contracts for the employee collection.
//!
//! # Responsibility
//! - Define the persistence seam between the in-memory directory and
//!   whichever backend holds the authoritative-at-rest copy.
//! - Keep backend transport details out of the service layer.
//!
//! # Invariants
//! - Every directory mutation produces exactly one `persist` call carrying
//!   both the specific mutation and the full post-mutation snapshot.
//! - `load` failures never abort startup; the directory degrades to an
//!   empty collection and records the error.

use crate::db::DbError;
use crate::model::employee::{Employee, EmployeeId, EmployeePatch};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod kv;
pub mod remote;

pub use kv::{SqliteKvStore, DEFAULT_COLLECTION_KEY};
pub use remote::RemoteHttpStore;

pub type PersistResult<T> = Result<T, PersistenceError>;

/// One completed in-memory mutation, announced to the backing store.
///
/// Local backends typically ignore the specifics and rewrite the snapshot;
/// the remote mirror translates each variant into its REST call.
#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    Created(&'a Employee),
    Updated {
        id: EmployeeId,
        patch: &'a EmployeePatch,
    },
    Deleted(EmployeeId),
}

impl Mutation<'_> {
    /// Stable operation label for log lines.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::Created(_) => "create",
            Self::Updated { .. } => "update",
            Self::Deleted(_) => "delete",
        }
    }
}

/// Persistence backend holding the at-rest copy of the collection.
pub trait BackingStore {
    /// Stable identifier for log lines.
    fn backend_id(&self) -> &'static str;

    /// Restores a previously persisted collection.
    ///
    /// Returns `Ok(None)` when nothing was ever persisted under this
    /// backend's key or endpoint.
    fn load(&self) -> PersistResult<Option<Vec<Employee>>>;

    /// Mirrors one mutation, given the full post-mutation snapshot.
    fn persist(&self, mutation: Mutation<'_>, snapshot: &[Employee]) -> PersistResult<()>;
}

/// Backing-store failure. Never fatal: the in-memory collection is already
/// mutated when a persist error surfaces, and the worst outcome is a stale
/// or unsynced at-rest copy.
#[derive(Debug)]
pub enum PersistenceError {
    Db(DbError),
    Serialize(serde_json::Error),
    Http {
        operation: &'static str,
        source: reqwest::Error,
    },
    RemoteStatus {
        operation: &'static str,
        status: u16,
    },
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "collection snapshot is not serializable: {err}"),
            Self::Http { operation, source } => {
                write!(f, "remote {operation} request failed: {source}")
            }
            Self::RemoteStatus { operation, status } => {
                write!(f, "remote {operation} request returned status {status}")
            }
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; run migrations via db::open_db"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection is missing required table `{table}`")
            }
        }
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Http { source, .. } => Some(source),
            Self::RemoteStatus { .. } => None,
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for PersistenceError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
