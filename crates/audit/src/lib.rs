//! # VaultGuard Audit
//!
//! Audit trail of validation decisions. Filter mode drops entries from the
//! batch; this log is where the drops remain visible.

pub mod audit_logger;

pub use audit_logger::{AuditEntry, AuditEventType, AuditLogger, AuditStats};
