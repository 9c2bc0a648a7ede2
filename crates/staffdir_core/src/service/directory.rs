//! Employee directory record store.
//!
//! # Responsibility
//! - Hold the single in-memory source of truth for the employee
//!   collection and mediate all mutations.
//! - Forward every mutation to the backing store and surface persistence
//!   failures without rolling back.
//!
//! # Invariants
//! - Collection order is insertion order; deletion removes in place.
//! - Assigned ids are unique within the collection at any observed point.
//! - Mutations run to completion one at a time; `&mut self` encodes the
//!   single-mutator rule.

use crate::model::employee::{
    current_epoch_ms, Employee, EmployeeDraft, EmployeeId, EmployeePatch,
};
use crate::store::{BackingStore, Mutation, PersistenceError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Record-store error for lookups that name a specific id.
///
/// Never fatal: an unknown id is surfaced to the caller and the collection
/// is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    NotFound(EmployeeId),
}

impl Display for DirectoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for DirectoryError {}

/// In-memory employee collection synchronized with one backing store.
///
/// Callers hold the directory by value and pass it wherever record access
/// is needed; there is no ambient global collection.
pub struct Directory {
    backing: Box<dyn BackingStore>,
    records: Vec<Employee>,
    last_error: Option<PersistenceError>,
}

impl Directory {
    /// Opens the directory, restoring any previously persisted collection.
    ///
    /// # Contract
    /// - Missing at-rest state starts an empty collection.
    /// - Undecodable or unreachable at-rest state also starts an empty
    ///   collection; the failure is logged and retrievable via
    ///   [`Directory::last_persistence_error`].
    pub fn open(backing: Box<dyn BackingStore>) -> Self {
        let mut directory = Self {
            backing,
            records: Vec::new(),
            last_error: None,
        };

        match directory.backing.load() {
            Ok(Some(records)) => {
                info!(
                    "event=store_load module=store status=ok backend={} count={}",
                    directory.backing.backend_id(),
                    records.len()
                );
                directory.records = records;
            }
            Ok(None) => {
                info!(
                    "event=store_load module=store status=ok backend={} count=0 source=empty",
                    directory.backing.backend_id()
                );
            }
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error backend={} fallback=empty error={}",
                    directory.backing.backend_id(),
                    err
                );
                directory.last_error = Some(err);
            }
        }

        directory
    }

    /// Returns the current ordered collection.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record with the given id, if present.
    pub fn get_by_id(&self, id: EmployeeId) -> Option<&Employee> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Case-insensitive substring filter over name and email.
    pub fn search(&self, term: &str) -> Vec<&Employee> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&needle)
                    || record.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Appends a new record built from an already validated draft.
    ///
    /// # Contract
    /// - The draft must have passed [`crate::form::validate_draft`]; this
    ///   store does not re-validate.
    /// - A fresh id distinct from every existing id is assigned here.
    /// - The new collection is persisted before returning.
    pub fn create(&mut self, draft: EmployeeDraft) -> Employee {
        let id = self.next_id();
        let record = Employee::from_draft(id, draft);
        self.records.push(record.clone());

        info!(
            "event=store_create module=store status=ok id={} count={}",
            id,
            self.records.len()
        );
        self.persist_mutation(Mutation::Created(&record));
        record
    }

    /// Merges a patch into the record with the given id.
    ///
    /// Absent patch fields retain their prior values. An unknown id leaves
    /// the collection unchanged.
    pub fn update(
        &mut self,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, DirectoryError> {
        let Some(position) = self.records.iter().position(|record| record.id == id) else {
            info!("event=store_update module=store status=not_found id={id}");
            return Err(DirectoryError::NotFound(id));
        };

        self.records[position].apply_patch(&patch);
        let updated = self.records[position].clone();

        info!("event=store_update module=store status=ok id={id}");
        self.persist_mutation(Mutation::Updated { id, patch: &patch });
        Ok(updated)
    }

    /// Removes the first record with the given id.
    ///
    /// Idempotent: deleting a missing id is a no-op, reported as `false`.
    /// Confirmation prompts are the caller's concern.
    pub fn delete(&mut self, id: EmployeeId) -> bool {
        let Some(position) = self.records.iter().position(|record| record.id == id) else {
            info!("event=store_delete module=store status=noop id={id}");
            return false;
        };

        self.records.remove(position);
        info!(
            "event=store_delete module=store status=ok id={} count={}",
            id,
            self.records.len()
        );
        self.persist_mutation(Mutation::Deleted(id));
        true
    }

    /// Outcome of the most recent persistence attempt, if it failed.
    ///
    /// The in-memory collection is already mutated when this is set; the
    /// caller surfaces it as a banner, not as a rollback signal.
    pub fn last_persistence_error(&self) -> Option<&PersistenceError> {
        self.last_error.as_ref()
    }

    /// Takes and clears the recorded persistence failure.
    pub fn take_persistence_error(&mut self) -> Option<PersistenceError> {
        self.last_error.take()
    }

    /// Epoch-millisecond candidate bumped past any colliding existing id.
    fn next_id(&self) -> EmployeeId {
        let mut candidate = current_epoch_ms();
        while self.records.iter().any(|record| record.id == candidate) {
            candidate += 1;
        }
        candidate
    }

    fn persist_mutation(&mut self, mutation: Mutation<'_>) {
        let operation = mutation.operation();
        match self.backing.persist(mutation, &self.records) {
            Ok(()) => {
                self.last_error = None;
            }
            Err(err) => {
                error!(
                    "event=persist module=store status=error backend={} op={} error={}",
                    self.backing.backend_id(),
                    operation,
                    err
                );
                self.last_error = Some(err);
            }
        }
    }
}
