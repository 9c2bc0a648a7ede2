//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate backing-store calls into the record-store facade.
//! - Keep UI layers decoupled from persistence details.

pub mod directory;
