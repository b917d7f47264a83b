//! RoleCatalog - approved-role lookup by name or definition id

use crate::builtin;
use regex::Regex;
use serde::{Deserialize, Serialize};
use shared::VaultGuardError;
use std::collections::HashSet;
use uuid::Uuid;

/// Custom role definitions are identified by a resource path instead of a
/// well-known name. Their effective permissions cannot be enumerated
/// statically, so any reference of this shape is refused. Resource ids
/// compare case-insensitively.
const CUSTOM_ROLE_ID_PATTERN: &str =
    r"(?i)^/subscriptions/[^/]+/providers/Microsoft\.Authorization/roleDefinitions/[^/]+$";

/// Blast-radius classification of a role, for reporting only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleTier {
    ReadOnly,
    NarrowWrite,
    Administrative,
}

impl std::fmt::Display for RoleTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::ReadOnly => "read-only",
            Self::NarrowWrite => "narrow-write",
            Self::Administrative => "administrative",
        };
        f.write_str(text)
    }
}

/// One approved data-plane role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCatalogEntry {
    pub role_name: String,
    pub role_id: Uuid,
    pub tier: RoleTier,
}

/// Immutable allow-list of roles, built once and injected where needed
///
/// Two separate lists: data-plane entries (name + id + tier) and the generic
/// monitoring roles. `is_approved` composes them; `is_blocked` wins over
/// both.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<RoleCatalogEntry>,
    monitoring_roles: Vec<String>,
    blocked_roles: Vec<String>,
    custom_role_pattern: Regex,
}

impl RoleCatalog {
    /// Create a catalog, validating uniqueness of names and ids eagerly
    pub fn new(
        entries: Vec<RoleCatalogEntry>,
        monitoring_roles: Vec<String>,
        blocked_roles: Vec<String>,
    ) -> shared::Result<Self> {
        let mut names = HashSet::new();
        let mut ids = HashSet::new();
        for entry in &entries {
            if !names.insert(entry.role_name.as_str()) {
                return Err(VaultGuardError::Config(format!(
                    "duplicate role name '{}' in catalog",
                    entry.role_name
                )));
            }
            if !ids.insert(entry.role_id) {
                return Err(VaultGuardError::Config(format!(
                    "duplicate role id '{}' in catalog",
                    entry.role_id
                )));
            }
        }

        let custom_role_pattern = Regex::new(CUSTOM_ROLE_ID_PATTERN)
            .map_err(|e| VaultGuardError::Config(format!("custom role pattern: {}", e)))?;

        Ok(Self {
            entries,
            monitoring_roles,
            blocked_roles,
            custom_role_pattern,
        })
    }

    /// The canonical least-privilege catalog
    pub fn least_privilege() -> Self {
        let entries = builtin::DATA_PLANE_ROLES
            .iter()
            .map(|(name, id, tier)| RoleCatalogEntry {
                role_name: name.to_string(),
                role_id: Uuid::parse_str(id).expect("built-in role id is a valid UUID"),
                tier: *tier,
            })
            .collect();
        let monitoring = builtin::MONITORING_ROLES
            .iter()
            .map(|r| r.to_string())
            .collect();
        let blocked = builtin::BLOCKED_ROLES.iter().map(|r| r.to_string()).collect();

        Self::new(entries, monitoring, blocked).expect("built-in catalog is well-formed")
    }

    /// Case-sensitive match against a data-plane entry's name or id
    ///
    /// Id references match the canonical lowercase hyphenated form only.
    pub fn is_data_plane_role(&self, role_reference: &str) -> bool {
        self.entries.iter().any(|e| {
            e.role_name == role_reference || e.role_id.to_string() == role_reference
        })
    }

    /// Membership in the generic monitoring list
    pub fn is_monitoring_role(&self, role_reference: &str) -> bool {
        self.monitoring_roles.iter().any(|r| r == role_reference)
    }

    /// True iff the reference names a data-plane entry or a monitoring role
    pub fn is_approved(&self, role_reference: &str) -> bool {
        self.is_data_plane_role(role_reference) || self.is_monitoring_role(role_reference)
    }

    /// True for blocked names and for custom role resource ids
    pub fn is_blocked(&self, role_reference: &str) -> bool {
        self.blocked_roles.iter().any(|r| r == role_reference)
            || self.custom_role_pattern.is_match(role_reference)
    }

    /// Tier classification; monitoring roles classify as read-only
    pub fn tier_of(&self, role_reference: &str) -> Option<RoleTier> {
        if let Some(entry) = self.entries.iter().find(|e| {
            e.role_name == role_reference || e.role_id.to_string() == role_reference
        }) {
            return Some(entry.tier);
        }
        if self.is_monitoring_role(role_reference) {
            return Some(RoleTier::ReadOnly);
        }
        None
    }

    /// Every approved role name, data-plane entries first, for error text
    pub fn approved_role_names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| e.role_name.clone())
            .chain(self.monitoring_roles.iter().cloned())
            .collect()
    }

    pub fn entries(&self) -> &[RoleCatalogEntry] {
        &self.entries
    }

    pub fn monitoring_roles(&self) -> &[String] {
        &self.monitoring_roles
    }

    pub fn blocked_roles(&self) -> &[String] {
        &self.blocked_roles
    }
}
