//! Error types for VaultGuard

use crate::assignment::RejectedAssignment;
use thiserror::Error;

/// Error raised in hard-fail mode when any assignment in the batch is refused
#[derive(Debug, Error)]
#[error("role assignment validation failed: {}. Approved roles: {}", rejected.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("; "), approved_roles.join(", "))]
pub struct BatchValidationError {
    pub rejected: Vec<RejectedAssignment>,
    pub approved_roles: Vec<String>,
}

/// Error raised when a vault requests both access models at once
#[derive(Debug, Error)]
#[error("vault requests {access_policy_count} legacy access policies and {role_assignment_count} RBAC role assignments; the two access models are mutually exclusive")]
pub struct ConflictingAccessModelError {
    pub access_policy_count: usize,
    pub role_assignment_count: usize,
}

/// General VaultGuard error type
#[derive(Debug, Error)]
pub enum VaultGuardError {
    #[error(transparent)]
    BatchValidation(#[from] BatchValidationError),

    #[error(transparent)]
    ConflictingAccessModel(#[from] ConflictingAccessModelError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Identity resolution error: {0}")]
    Identity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, VaultGuardError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::RejectionReason;

    #[test]
    fn test_batch_error_enumerates_entries_and_catalog() {
        let err = BatchValidationError {
            rejected: vec![
                RejectedAssignment {
                    key: "admin".to_string(),
                    reason: RejectionReason::BlockedRole {
                        role: "Key Vault Administrator".to_string(),
                    },
                },
                RejectedAssignment {
                    key: "typo".to_string(),
                    reason: RejectionReason::UnapprovedRole {
                        role: "Key Valut Reader".to_string(),
                    },
                },
            ],
            approved_roles: vec![
                "Key Vault Reader".to_string(),
                "Key Vault Secrets User".to_string(),
            ],
        };

        let text = err.to_string();
        assert!(text.contains("'admin'"));
        assert!(text.contains("Key Vault Administrator"));
        assert!(text.contains("'typo'"));
        assert!(text.contains("Key Valut Reader"));
        assert!(text.contains("Key Vault Secrets User"));
    }

    #[test]
    fn test_conflicting_access_model_message() {
        let err = ConflictingAccessModelError {
            access_policy_count: 2,
            role_assignment_count: 3,
        };
        let text = err.to_string();
        assert!(text.contains("2 legacy access policies"));
        assert!(text.contains("3 RBAC role assignments"));
        assert!(text.contains("mutually exclusive"));
    }

    #[test]
    fn test_error_conversions() {
        let batch = BatchValidationError {
            rejected: Vec::new(),
            approved_roles: Vec::new(),
        };
        let err: VaultGuardError = batch.into();
        assert!(matches!(err, VaultGuardError::BatchValidation(_)));

        let conflict = ConflictingAccessModelError {
            access_policy_count: 1,
            role_assignment_count: 1,
        };
        let err: VaultGuardError = conflict.into();
        assert!(matches!(err, VaultGuardError::ConflictingAccessModel(_)));
    }
}
