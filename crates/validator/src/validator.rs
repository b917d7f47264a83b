//! AssignmentValidator - batch validation and filtering of role assignments

use crate::identity::CurrentIdentity;
use catalog::RoleCatalog;
use serde::{Deserialize, Serialize};
use shared::{
    ApprovedAssignment, BatchValidationError, CallerIdentity, ConflictingAccessModelError,
    Logger, PrincipalType, RejectedAssignment, RejectionReason, RoleAssignmentRequest,
    VaultAccessConfig, VaultGuardError,
};
use std::sync::Arc;
use uuid::Uuid;

/// How rejections affect the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnforcementMode {
    /// Any rejection fails the whole batch atomically
    #[default]
    HardFail,
    /// Rejected entries are dropped and the remainder proceeds
    ///
    /// The weaker mode: a typo becomes a missing assignment instead of an
    /// error. Opt-in only; every drop is logged and reported.
    Filter,
}

/// Outcome of validating one batch
///
/// Carries no timestamps, so validating the same batch twice yields
/// identical reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Assignments that passed every check, in sorted key order
    pub approved: Vec<ApprovedAssignment>,
    /// Assignments that were refused, in sorted key order
    pub rejected: Vec<RejectedAssignment>,
}

impl ValidationReport {
    /// Number of entries dropped in filter mode
    pub fn dropped_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates a vault's requested role assignments against an injected catalog
pub struct AssignmentValidator {
    catalog: RoleCatalog,
    identity: Arc<dyn CurrentIdentity>,
    logger: Arc<dyn Logger>,
    mode: EnforcementMode,
}

impl AssignmentValidator {
    /// Create a validator in hard-fail mode
    pub fn new(
        catalog: RoleCatalog,
        identity: Arc<dyn CurrentIdentity>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog,
            identity,
            logger,
            mode: EnforcementMode::HardFail,
        }
    }

    /// Builder: switch the enforcement mode
    pub fn with_mode(mut self, mode: EnforcementMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> EnforcementMode {
        self.mode
    }

    /// Validate one vault's requested access configuration
    ///
    /// Assignments are processed in sorted key order so reports and error
    /// messages are deterministic.
    pub fn validate(&self, config: &VaultAccessConfig) -> shared::Result<ValidationReport> {
        // Mixing the legacy model with RBAC assignments is a configuration
        // error, never resolved silently.
        if !config.access_policies.is_empty() && !config.role_assignments.is_empty() {
            self.logger.error("conflicting access models requested");
            return Err(ConflictingAccessModelError {
                access_policy_count: config.access_policies.len(),
                role_assignment_count: config.role_assignments.len(),
            }
            .into());
        }

        let mut approved = Vec::new();
        let mut rejected = Vec::new();
        let mut cached_caller: Option<CallerIdentity> = None;

        for key in config.assignment_keys() {
            let request = &config.role_assignments[key];
            let principal_id = self.resolved_principal(request, &mut cached_caller)?;

            match self.evaluate(key, request, principal_id) {
                Ok(assignment) => approved.push(assignment),
                Err(reason) => {
                    let entry = RejectedAssignment {
                        key: key.to_string(),
                        reason,
                    };
                    if self.mode == EnforcementMode::Filter {
                        self.logger.warn(&format!("dropping assignment {}", entry));
                    }
                    rejected.push(entry);
                }
            }
        }

        if self.mode == EnforcementMode::HardFail && !rejected.is_empty() {
            self.logger.error(&format!(
                "batch failed validation, {} assignment(s) refused",
                rejected.len()
            ));
            return Err(BatchValidationError {
                rejected,
                approved_roles: self.catalog.approved_role_names(),
            }
            .into());
        }

        if !rejected.is_empty() {
            self.logger.warn(&format!(
                "{} assignment(s) dropped from the batch",
                rejected.len()
            ));
        }

        Ok(ValidationReport { approved, rejected })
    }

    /// Fill an absent principalId from the caller identity, at most one
    /// lookup per batch
    fn resolved_principal(
        &self,
        request: &RoleAssignmentRequest,
        cache: &mut Option<CallerIdentity>,
    ) -> shared::Result<String> {
        if let Some(id) = &request.principal_id {
            return Ok(id.clone());
        }

        if cache.is_none() {
            let caller = self.identity.current()?;
            self.logger.debug(&format!(
                "resolved caller principal '{}' for tenant '{}'",
                caller.principal_id, caller.tenant_id
            ));
            *cache = Some(caller);
        }

        let caller = cache
            .as_ref()
            .ok_or_else(|| VaultGuardError::Identity("caller identity unavailable".to_string()))?;
        Ok(caller.principal_id.clone())
    }

    /// The per-assignment policy check; check order is load-bearing
    fn evaluate(
        &self,
        key: &str,
        request: &RoleAssignmentRequest,
        principal_id: String,
    ) -> std::result::Result<ApprovedAssignment, RejectionReason> {
        let principal_type = PrincipalType::parse(&request.principal_type).ok_or_else(|| {
            RejectionReason::InvalidPrincipalType {
                value: request.principal_type.clone(),
            }
        })?;

        if Uuid::parse_str(&principal_id).is_err() {
            return Err(RejectionReason::InvalidPrincipalId {
                value: principal_id,
            });
        }

        // Blocked wins even when the reference also appears in the catalog
        if self.catalog.is_blocked(&request.role_reference) {
            return Err(RejectionReason::BlockedRole {
                role: request.role_reference.clone(),
            });
        }

        if !self.catalog.is_approved(&request.role_reference) {
            return Err(RejectionReason::UnapprovedRole {
                role: request.role_reference.clone(),
            });
        }

        Ok(ApprovedAssignment {
            key: key.to_string(),
            role_reference: request.role_reference.clone(),
            principal_id,
            principal_type,
            description: request.description.clone(),
            condition: request.condition.clone(),
            condition_version: request.condition_version.clone(),
            delegated_managed_identity_resource_id: request
                .delegated_managed_identity_resource_id
                .clone(),
        })
    }
}
