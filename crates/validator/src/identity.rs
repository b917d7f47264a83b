//! CurrentIdentity - caller identity collaborator
//!
//! The one external lookup the validator may perform: when an assignment
//! omits principalId, the caller's own identity fills it in.

use shared::{CallerIdentity, VaultGuardError};

/// Source of the caller identity used for principalId auto-detection
pub trait CurrentIdentity: Send + Sync {
    fn current(&self) -> shared::Result<CallerIdentity>;
}

/// Identity supplied up front, typically from configuration
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    identity: CallerIdentity,
}

impl StaticIdentity {
    pub fn new(identity: CallerIdentity) -> Self {
        Self { identity }
    }
}

impl CurrentIdentity for StaticIdentity {
    fn current(&self) -> shared::Result<CallerIdentity> {
        Ok(self.identity.clone())
    }
}

/// Identity source for configurations where every principal is explicit
///
/// Any lookup is a configuration mistake and fails loudly.
#[derive(Debug, Clone, Default)]
pub struct NoIdentity;

impl CurrentIdentity for NoIdentity {
    fn current(&self) -> shared::Result<CallerIdentity> {
        Err(VaultGuardError::Identity(
            "no caller identity is configured and an assignment omits principalId".to_string(),
        ))
    }
}
