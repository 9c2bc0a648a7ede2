//! Draft validation for the create and edit forms.
//!
//! # Responsibility
//! - Check a candidate record for required fields and email shape.
//! - Report problems as a field-to-message mapping the form can render
//!   inline.
//!
//! # Invariants
//! - Validation is pure and stateless; the same draft always yields the
//!   same report.
//! - An empty report means the draft may reach the store.
//! - Values pass through unmodified on success; trimming happens only for
//!   the emptiness check itself.

use crate::model::employee::EmployeeDraft;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Whether the `role` field participates in validation.
///
/// The record always carries a role; one form variant requires it, the
/// other omits the field entirely. Both variants call the same validator
/// with the policy that matches their schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RolePolicy {
    Required,
    Optional,
}

/// Field-to-message mapping produced by draft validation.
///
/// Ordered by field name so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationReport {
    /// Returns whether the draft may be submitted.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the message for one field, if it failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn flag(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

/// Validates a draft before it reaches the record store.
///
/// # Contract
/// - `name` must be non-empty after trimming.
/// - `email` must be non-empty and match the simple `local@domain.tld`
///   shape.
/// - `role` must be non-empty after trimming only under
///   [`RolePolicy::Required`].
/// - The store is never invoked for a draft whose report is non-empty;
///   that call discipline belongs to the caller.
pub fn validate_draft(draft: &EmployeeDraft, role_policy: RolePolicy) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.flag("name", "Name is required");
    }

    if draft.email.trim().is_empty() {
        report.flag("email", "Email is required");
    } else if !EMAIL_RE.is_match(&draft.email) {
        report.flag("email", "Invalid email format");
    }

    if role_policy == RolePolicy::Required && draft.role.trim().is_empty() {
        report.flag("role", "Role is required");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::{validate_draft, RolePolicy};
    use crate::model::employee::EmployeeDraft;

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft::new("Ana", "ana@x.com", "Dev")
    }

    #[test]
    fn accepts_complete_draft() {
        let report = validate_draft(&valid_draft(), RolePolicy::Required);
        assert!(report.is_valid());
        assert_eq!(report.len(), 0);
    }

    #[test]
    fn flags_missing_name_and_email() {
        let draft = EmployeeDraft::new("   ", "", "Dev");
        let report = validate_draft(&draft, RolePolicy::Required);

        assert!(!report.is_valid());
        assert_eq!(report.error_for("name"), Some("Name is required"));
        assert_eq!(report.error_for("email"), Some("Email is required"));
        assert_eq!(report.error_for("role"), None);
    }

    #[test]
    fn flags_email_without_at_sign() {
        let mut draft = valid_draft();
        draft.email = "ana.x.com".to_string();

        let report = validate_draft(&draft, RolePolicy::Required);
        assert_eq!(report.error_for("email"), Some("Invalid email format"));
    }

    #[test]
    fn flags_email_without_domain_dot() {
        let mut draft = valid_draft();
        draft.email = "ana@localhost".to_string();

        let report = validate_draft(&draft, RolePolicy::Required);
        assert_eq!(report.error_for("email"), Some("Invalid email format"));
    }

    #[test]
    fn flags_email_with_embedded_whitespace() {
        let mut draft = valid_draft();
        draft.email = "ana smith@x.com".to_string();

        let report = validate_draft(&draft, RolePolicy::Required);
        assert_eq!(report.error_for("email"), Some("Invalid email format"));
    }

    #[test]
    fn role_requirement_follows_policy() {
        let draft = EmployeeDraft::new("Ana", "ana@x.com", "  ");

        let strict = validate_draft(&draft, RolePolicy::Required);
        assert_eq!(strict.error_for("role"), Some("Role is required"));

        let lenient = validate_draft(&draft, RolePolicy::Optional);
        assert!(lenient.is_valid());
    }

    #[test]
    fn does_not_normalize_values_on_success() {
        // Trimming is only an emptiness probe; the submitted values keep
        // their surrounding whitespace.
        let draft = EmployeeDraft::new("  Ana  ", "ana@x.com", "Dev");
        let report = validate_draft(&draft, RolePolicy::Required);

        assert!(report.is_valid());
        assert_eq!(draft.name, "  Ana  ");
    }

    #[test]
    fn report_iterates_fields_in_stable_order() {
        let draft = EmployeeDraft::new("", "bad", "");
        let report = validate_draft(&draft, RolePolicy::Required);

        let fields: Vec<&str> = report.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["email", "name", "role"]);
    }
}
