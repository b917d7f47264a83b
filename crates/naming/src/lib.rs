//! # VaultGuard Naming
//!
//! Resource-name convention builder: service, region, application,
//! objective, environment and correlative codes concatenated into one
//! lowercase name, with the region code taken from an injected lookup table.

pub mod convention;

pub use convention::{NameParts, NamingConvention};
