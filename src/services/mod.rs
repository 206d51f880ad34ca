//! External service interactions
//!
//! - Audit log sources (the activity log viewer's data collaborator)

pub mod audit_source;

pub use audit_source::{AuditLogSource, FileAuditLogSource};
