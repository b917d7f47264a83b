//! # VaultGuard Validator
//!
//! Batch validation and filtering of requested role assignments.
//!
//! ## Components
//!
//! - `AssignmentValidator` - the per-assignment policy check
//! - `EnforcementMode` - hard-fail (default) or explicit filter mode
//! - `CurrentIdentity` - caller identity collaborator for principalId auto-detection

pub mod identity;
pub mod validator;

pub use identity::{CurrentIdentity, NoIdentity, StaticIdentity};
pub use validator::{AssignmentValidator, EnforcementMode, ValidationReport};
