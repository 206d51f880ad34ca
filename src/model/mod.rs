//! Model layer
//!
//! This module contains all state-related types:
//! - `AuditLogEntry` - Read-only audit snapshots and their display helpers
//! - `PricingFormState` / `PricingRequest` - Pricing form values
//! - `Scenario` - Current scenario values owned by the shell
//! - `ModalStack` - Modal overlay management

pub mod audit;
pub mod modal;
pub mod pricing;
pub mod scenario;

// Re-export commonly used types
pub use audit::{AuditLogEntry, BadgeVariant, DateLocale};
pub use pricing::{PricingFormState, PricingRequest};
pub use scenario::Scenario;
