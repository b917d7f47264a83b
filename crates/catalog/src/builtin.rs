//! Canonical least-privilege role table
//!
//! Role names and definition ids must match the platform's well-known roles
//! exactly; lookups are case-sensitive.

use crate::catalog::RoleTier;

/// Key Vault data-plane roles approved for automated assignment
pub const DATA_PLANE_ROLES: [(&str, &str, RoleTier); 10] = [
    (
        "Key Vault Reader",
        "21090545-7ca7-4776-b22c-e363652d74d2",
        RoleTier::ReadOnly,
    ),
    (
        "Key Vault Secrets User",
        "4633458b-17de-408a-b874-0445c86b69e6",
        RoleTier::ReadOnly,
    ),
    (
        "Key Vault Secrets Officer",
        "b86a8fe4-44ce-4948-aee5-eccb2c155cd7",
        RoleTier::NarrowWrite,
    ),
    (
        "Key Vault Crypto User",
        "12338af0-0e69-4776-bea7-57ae8d297424",
        RoleTier::NarrowWrite,
    ),
    (
        "Key Vault Crypto Officer",
        "14b46e9e-c2b7-41b4-b07b-48a6ebf60603",
        RoleTier::NarrowWrite,
    ),
    (
        "Key Vault Crypto Service Encryption User",
        "e147488a-f6f5-4113-8e2d-b22465e65bf6",
        RoleTier::ReadOnly,
    ),
    (
        "Key Vault Crypto Service Release User",
        "08bbd89e-9f13-488c-ac41-acfcb10c90ab",
        RoleTier::ReadOnly,
    ),
    (
        "Key Vault Certificate User",
        "db79e9a7-68ee-4b58-9aeb-b90e7c24fcba",
        RoleTier::ReadOnly,
    ),
    (
        "Key Vault Certificates Officer",
        "a4417e6f-fecd-4de8-b567-7b0420556985",
        RoleTier::NarrowWrite,
    ),
    (
        "Key Vault Data Access Administrator",
        "8b54135c-b56d-4d72-a534-26097cfdc8d8",
        RoleTier::Administrative,
    ),
];

/// Generic observability roles with no data-plane risk
///
/// Kept separate from the data-plane table on purpose; callers compose the
/// two lists explicitly.
pub const MONITORING_ROLES: [&str; 3] = ["Reader", "Monitoring Reader", "Security Reader"];

/// Privileged roles never accepted, regardless of catalog membership
pub const BLOCKED_ROLES: [&str; 8] = [
    "Owner",
    "Contributor",
    "User Access Administrator",
    "Key Vault Administrator",
    "Key Vault Contributor",
    "Security Admin",
    "Backup Operator",
    "Restore Operator",
];
