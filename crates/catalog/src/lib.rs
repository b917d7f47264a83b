//! # VaultGuard Catalog
//!
//! The immutable allow-list of Key Vault roles approved for automated
//! assignment.
//!
//! ## Components
//!
//! - `RoleCatalog` - lookup by role name or role definition id
//! - `RoleTier` - blast-radius classification, for reporting only
//! - `builtin` - the canonical least-privilege role table

pub mod builtin;
pub mod catalog;

pub use catalog::{RoleCatalog, RoleCatalogEntry, RoleTier};
