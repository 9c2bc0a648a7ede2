//! Canonical employee-directory data model.
//!
//! # Responsibility
//! - Define the record, draft and patch shapes shared by all store backends.
//! - Keep id semantics (assignment source, text coercion) in one place.
//!
//! # Invariants
//! - Every persisted record is identified by a numeric `EmployeeId`.
//! - Collection order is insertion order; deletion removes in place.

pub mod employee;
