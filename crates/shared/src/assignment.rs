//! Role assignment request and outcome types

use serde::{Deserialize, Serialize};

/// Principal categories that may receive a role assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrincipalType {
    User,
    Group,
    ServicePrincipal,
    ManagedIdentity,
}

impl PrincipalType {
    /// The accepted principalType spellings, in display order
    pub const ALLOWED: [&'static str; 4] =
        ["User", "Group", "ServicePrincipal", "ManagedIdentity"];

    /// Parse an externally-supplied principal type (case-sensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "User" => Some(Self::User),
            "Group" => Some(Self::Group),
            "ServicePrincipal" => Some(Self::ServicePrincipal),
            "ManagedIdentity" => Some(Self::ManagedIdentity),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Group => "Group",
            Self::ServicePrincipal => "ServicePrincipal",
            Self::ManagedIdentity => "ManagedIdentity",
        }
    }
}

impl std::fmt::Display for PrincipalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested role assignment, one entry of a batch keyed by a unique label
///
/// `principal_type` stays a raw string so that an unknown value surfaces as a
/// validation outcome instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignmentRequest {
    /// Approved role name or role definition id
    pub role_reference: String,

    /// Object id of the principal; resolved from the caller identity when absent
    #[serde(default)]
    pub principal_id: Option<String>,

    /// Principal category; must be one of [`PrincipalType::ALLOWED`]
    pub principal_type: String,

    /// Free-text description, passed through unchanged
    #[serde(default)]
    pub description: Option<String>,

    /// ABAC condition, passed through unchanged
    #[serde(default)]
    pub condition: Option<String>,

    /// Version of the condition syntax, passed through unchanged
    #[serde(default)]
    pub condition_version: Option<String>,

    /// Delegated managed identity resource id, passed through unchanged
    #[serde(default)]
    pub delegated_managed_identity_resource_id: Option<String>,
}

impl RoleAssignmentRequest {
    /// Create a minimal request
    pub fn new(role_reference: impl Into<String>, principal_type: impl Into<String>) -> Self {
        Self {
            role_reference: role_reference.into(),
            principal_id: None,
            principal_type: principal_type.into(),
            description: None,
            condition: None,
            condition_version: None,
            delegated_managed_identity_resource_id: None,
        }
    }

    /// Builder: set the principal object id
    pub fn with_principal(mut self, principal_id: impl Into<String>) -> Self {
        self.principal_id = Some(principal_id.into());
        self
    }

    /// Builder: set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder: set an ABAC condition and its syntax version
    pub fn with_condition(
        mut self,
        condition: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.condition = Some(condition.into());
        self.condition_version = Some(version.into());
        self
    }
}

/// Why an assignment was refused
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    /// principalType outside the allowed set
    InvalidPrincipalType { value: String },
    /// principalId is not a well-formed object id
    InvalidPrincipalId { value: String },
    /// Explicitly disallowed privileged role, or a custom role reference
    BlockedRole { role: String },
    /// Not in the approved catalog or the monitoring list
    UnapprovedRole { role: String },
}

impl RejectionReason {
    /// Stable code for audit records and machine consumers
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidPrincipalType { .. } => "InvalidPrincipalType",
            Self::InvalidPrincipalId { .. } => "InvalidPrincipalId",
            Self::BlockedRole { .. } => "BlockedRole",
            Self::UnapprovedRole { .. } => "UnapprovedRole",
        }
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrincipalType { value } => write!(
                f,
                "principal type '{}' is not one of {}",
                value,
                PrincipalType::ALLOWED.join(", ")
            ),
            Self::InvalidPrincipalId { value } => {
                write!(f, "principal id '{}' is not a well-formed object id", value)
            }
            Self::BlockedRole { role } => {
                write!(f, "role '{}' is blocked for automated assignment", role)
            }
            Self::UnapprovedRole { role } => {
                write!(f, "role '{}' is not in the approved catalog", role)
            }
        }
    }
}

/// An assignment that passed every check, ready to hand off to provisioning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovedAssignment {
    /// Label of the entry within its batch
    pub key: String,
    pub role_reference: String,
    /// Resolved principal object id (never absent after validation)
    pub principal_id: String,
    pub principal_type: PrincipalType,
    pub description: Option<String>,
    pub condition: Option<String>,
    pub condition_version: Option<String>,
    pub delegated_managed_identity_resource_id: Option<String>,
}

/// An assignment that was refused, with the reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedAssignment {
    /// Label of the entry within its batch
    pub key: String,
    pub reason: RejectionReason,
}

impl std::fmt::Display for RejectedAssignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}': {}", self.key, self.reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== PrincipalType Tests ==============

    #[test]
    fn test_parse_allowed_types() {
        assert_eq!(PrincipalType::parse("User"), Some(PrincipalType::User));
        assert_eq!(PrincipalType::parse("Group"), Some(PrincipalType::Group));
        assert_eq!(
            PrincipalType::parse("ServicePrincipal"),
            Some(PrincipalType::ServicePrincipal)
        );
        assert_eq!(
            PrincipalType::parse("ManagedIdentity"),
            Some(PrincipalType::ManagedIdentity)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_types() {
        assert_eq!(PrincipalType::parse("Application"), None);
        assert_eq!(PrincipalType::parse("Device"), None);
        assert_eq!(PrincipalType::parse(""), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(PrincipalType::parse("user"), None);
        assert_eq!(PrincipalType::parse("USER"), None);
        assert_eq!(PrincipalType::parse("servicePrincipal"), None);
    }

    #[test]
    fn test_parse_rejects_padded_values() {
        assert_eq!(PrincipalType::parse(" User"), None);
        assert_eq!(PrincipalType::parse("User "), None);
    }

    #[test]
    fn test_allowed_matches_parse() {
        for value in PrincipalType::ALLOWED {
            let parsed = PrincipalType::parse(value).unwrap();
            assert_eq!(parsed.as_str(), value);
        }
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(PrincipalType::ServicePrincipal.to_string(), "ServicePrincipal");
    }

    // ============== RoleAssignmentRequest Tests ==============

    #[test]
    fn test_request_builder_chain() {
        let request = RoleAssignmentRequest::new("Key Vault Secrets User", "User")
            .with_principal("11111111-1111-1111-1111-111111111111")
            .with_description("reader for the app team")
            .with_condition("@Resource[name] StringEquals 'app'", "2.0");

        assert_eq!(request.role_reference, "Key Vault Secrets User");
        assert_eq!(
            request.principal_id.as_deref(),
            Some("11111111-1111-1111-1111-111111111111")
        );
        assert_eq!(request.condition_version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_request_minimal_has_no_metadata() {
        let request = RoleAssignmentRequest::new("Key Vault Reader", "Group");

        assert!(request.principal_id.is_none());
        assert!(request.description.is_none());
        assert!(request.condition.is_none());
        assert!(request.condition_version.is_none());
        assert!(request.delegated_managed_identity_resource_id.is_none());
    }

    #[test]
    fn test_request_deserialization_camel_case() {
        let json = r#"{
            "roleReference": "Key Vault Secrets User",
            "principalId": "11111111-1111-1111-1111-111111111111",
            "principalType": "User",
            "conditionVersion": "2.0"
        }"#;

        let request: RoleAssignmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.role_reference, "Key Vault Secrets User");
        assert_eq!(request.principal_type, "User");
        assert_eq!(request.condition_version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_request_deserialization_optional_fields_default() {
        let json = r#"{
            "roleReference": "Key Vault Reader",
            "principalType": "Group"
        }"#;

        let request: RoleAssignmentRequest = serde_json::from_str(json).unwrap();
        assert!(request.principal_id.is_none());
        assert!(request.description.is_none());
    }

    #[test]
    fn test_request_serialization_roundtrip() {
        let request = RoleAssignmentRequest::new("Key Vault Crypto User", "ManagedIdentity")
            .with_principal("22222222-2222-2222-2222-222222222222")
            .with_condition("cond", "2.0");

        let json = serde_json::to_string(&request).unwrap();
        let parsed: RoleAssignmentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_unknown_principal_type_survives_deserialization() {
        // The batch validator, not serde, decides this is invalid
        let json = r#"{
            "roleReference": "Key Vault Reader",
            "principalType": "Application"
        }"#;

        let request: RoleAssignmentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.principal_type, "Application");
        assert_eq!(PrincipalType::parse(&request.principal_type), None);
    }

    // ============== RejectionReason Tests ==============

    #[test]
    fn test_reason_codes() {
        let reasons = [
            (
                RejectionReason::InvalidPrincipalType {
                    value: "Application".to_string(),
                },
                "InvalidPrincipalType",
            ),
            (
                RejectionReason::InvalidPrincipalId {
                    value: "nope".to_string(),
                },
                "InvalidPrincipalId",
            ),
            (
                RejectionReason::BlockedRole {
                    role: "Owner".to_string(),
                },
                "BlockedRole",
            ),
            (
                RejectionReason::UnapprovedRole {
                    role: "Contoso Custom Role".to_string(),
                },
                "UnapprovedRole",
            ),
        ];

        for (reason, code) in reasons {
            assert_eq!(reason.code(), code);
        }
    }

    #[test]
    fn test_reason_display_names_offending_value() {
        let reason = RejectionReason::BlockedRole {
            role: "Key Vault Administrator".to_string(),
        };
        assert!(reason.to_string().contains("Key Vault Administrator"));

        let reason = RejectionReason::InvalidPrincipalType {
            value: "Application".to_string(),
        };
        let text = reason.to_string();
        assert!(text.contains("Application"));
        assert!(text.contains("ServicePrincipal"));
    }

    #[test]
    fn test_reason_serialization_tagged() {
        let reason = RejectionReason::UnapprovedRole {
            role: "Contoso Custom Role".to_string(),
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert!(json.contains("\"kind\":\"unapproved_role\""));
        assert!(json.contains("Contoso Custom Role"));
    }

    #[test]
    fn test_rejected_assignment_display() {
        let rejected = RejectedAssignment {
            key: "app_reader".to_string(),
            reason: RejectionReason::UnapprovedRole {
                role: "Contributor".to_string(),
            },
        };
        let text = rejected.to_string();
        assert!(text.contains("app_reader"));
        assert!(text.contains("Contributor"));
    }

    // ============== ApprovedAssignment Tests ==============

    #[test]
    fn test_approved_serialization_camel_case() {
        let approved = ApprovedAssignment {
            key: "a".to_string(),
            role_reference: "Key Vault Reader".to_string(),
            principal_id: "11111111-1111-1111-1111-111111111111".to_string(),
            principal_type: PrincipalType::User,
            description: None,
            condition: None,
            condition_version: None,
            delegated_managed_identity_resource_id: None,
        };

        let json = serde_json::to_string(&approved).unwrap();
        assert!(json.contains("\"roleReference\""));
        assert!(json.contains("\"principalId\""));
        assert!(json.contains("\"principalType\":\"User\""));
    }
}
