//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted by every backing store.
//! - Provide draft/patch shapes for the create and edit flows.
//!
//! # Invariants
//! - `id` is unique within a collection at any observed point.
//! - Patch application replaces present fields and retains absent ones.
//! - `role` tolerates absent values on the wire (remote payloads may omit it).

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Numeric identifier assigned to a record at creation time.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Canonical directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned once at creation and preserved across updates.
    pub id: EmployeeId,
    /// Non-empty after successful draft validation.
    pub name: String,
    /// Non-empty, simple `local@domain.tld` shape after validation.
    pub email: String,
    /// May be empty; remote echo endpoints omit this field entirely.
    #[serde(default)]
    pub role: String,
}

impl Employee {
    /// Materializes a validated draft into a record with the given id.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
        }
    }

    /// Shallow-merges a patch: present fields replace, absent fields remain.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(role) = &patch.role {
            self.role = role.clone();
        }
    }
}

/// User-entered field values not yet validated or persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "str::is_empty")]
    pub role: String,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Partial record updating only the specified fields of an existing record.
///
/// Serialized with absent fields skipped so the remote mirror sends only
/// what actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl EmployeePatch {
    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.role.is_none()
    }
}

/// Coerces path-segment text into a record id.
///
/// Route parameters arrive as strings; comparison inside the store is
/// numeric, so coercion happens once at this edge.
pub fn parse_employee_id(raw: &str) -> Option<EmployeeId> {
    raw.trim().parse::<EmployeeId>().ok()
}

/// Current wall clock in epoch milliseconds, the id assignment source.
///
/// Uniqueness is best-effort here; the store bumps past collisions before
/// accepting a candidate.
pub fn current_epoch_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(_) => 0,
    }
}
