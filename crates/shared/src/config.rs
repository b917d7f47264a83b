//! Configuration types for VaultGuard

use crate::assignment::RoleAssignmentRequest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Legacy fine-grained access policy entry
///
/// Passed through untouched; the validator only counts these to detect a
/// conflicting access model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPolicyEntry {
    /// Object id of the principal the policy applies to
    pub object_id: String,

    #[serde(default)]
    pub key_permissions: Vec<String>,

    #[serde(default)]
    pub secret_permissions: Vec<String>,

    #[serde(default)]
    pub certificate_permissions: Vec<String>,
}

/// Identity of the caller, used when an assignment omits principalId
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallerIdentity {
    pub principal_id: String,
    pub tenant_id: String,
}

/// Requested access configuration for one vault
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccessConfig {
    /// Whether the vault uses RBAC authorization (default) or the legacy model
    #[serde(default = "default_rbac_authorization")]
    pub enable_rbac_authorization: bool,

    /// Legacy fine-grained access policies, mutually exclusive with roleAssignments
    #[serde(default)]
    pub access_policies: Vec<AccessPolicyEntry>,

    /// Requested role assignments, keyed by a batch-unique label
    #[serde(default)]
    pub role_assignments: HashMap<String, RoleAssignmentRequest>,

    /// Static caller identity for principalId auto-detection
    #[serde(default)]
    pub current_identity: Option<CallerIdentity>,
}

fn default_rbac_authorization() -> bool {
    true
}

impl Default for VaultAccessConfig {
    fn default() -> Self {
        Self {
            enable_rbac_authorization: true,
            access_policies: Vec::new(),
            role_assignments: HashMap::new(),
            current_identity: None,
        }
    }
}

impl VaultAccessConfig {
    /// Load configuration from a JSON or YAML file, chosen by extension
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
            _ => Ok(serde_json::from_str(&content)?),
        }
    }

    /// Assignment labels in sorted order
    pub fn assignment_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.role_assignments.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

/// Logger interface for dependency injection
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Simple console logger implementation
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        eprintln!("[DEBUG] {}", message);
    }

    fn info(&self, message: &str) {
        eprintln!("[INFO] {}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {}", message);
    }
}

/// No-op logger for testing
#[derive(Debug, Clone, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn debug(&self, _message: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
