//! AuditLogger - audit trail for role-assignment validation

use serde::{Deserialize, Serialize};
use shared::RejectedAssignment;
use std::collections::VecDeque;

/// Audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub timestamp: String,
    pub event_type: AuditEventType,
    /// Batch label of the assignment, when the event concerns one entry
    pub assignment_key: Option<String>,
    pub role_reference: Option<String>,
    pub principal_id: Option<String>,
    pub success: bool,
    pub reason: Option<String>,
}

/// Types of audit events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEventType {
    BatchValidated,
    BatchRejected,
    AssignmentApproved,
    AssignmentDropped,
    PrincipalResolved,
    ConflictDetected,
}

/// Capacity-bounded audit logger; oldest entries are evicted first
#[derive(Debug)]
pub struct AuditLogger {
    entries: VecDeque<AuditEntry>,
    max_entries: usize,
}

impl AuditLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Append an entry, evicting the oldest when full
    pub fn log(&mut self, entry: AuditEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Record an approved assignment
    pub fn log_assignment_approved(
        &mut self,
        key: &str,
        role_reference: &str,
        principal_id: &str,
    ) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::AssignmentApproved,
            assignment_key: Some(key.to_string()),
            role_reference: Some(role_reference.to_string()),
            principal_id: Some(principal_id.to_string()),
            success: true,
            reason: None,
        });
    }

    /// Record an assignment dropped in filter mode
    pub fn log_assignment_dropped(&mut self, rejected: &RejectedAssignment) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::AssignmentDropped,
            assignment_key: Some(rejected.key.clone()),
            role_reference: None,
            principal_id: None,
            success: false,
            reason: Some(rejected.reason.to_string()),
        });
    }

    /// Record a batch outcome
    pub fn log_batch_outcome(&mut self, success: bool, reason: Option<&str>) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: if success {
                AuditEventType::BatchValidated
            } else {
                AuditEventType::BatchRejected
            },
            assignment_key: None,
            role_reference: None,
            principal_id: None,
            success,
            reason: reason.map(|s| s.to_string()),
        });
    }

    /// Record a conflicting access model configuration
    pub fn log_conflict(&mut self, reason: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::ConflictDetected,
            assignment_key: None,
            role_reference: None,
            principal_id: None,
            success: false,
            reason: Some(reason.to_string()),
        });
    }

    /// Record a caller-identity resolution
    pub fn log_principal_resolved(&mut self, principal_id: &str) {
        self.log(AuditEntry {
            timestamp: chrono::Utc::now().to_rfc3339(),
            event_type: AuditEventType::PrincipalResolved,
            assignment_key: None,
            role_reference: None,
            principal_id: Some(principal_id.to_string()),
            success: true,
            reason: None,
        });
    }

    /// Most recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    /// Most recent refusals, newest first
    pub fn get_recent_denials(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !e.success)
            .take(limit)
            .collect()
    }

    pub fn get_stats(&self) -> AuditStats {
        let total = self.entries.len();
        let denials = self.entries.iter().filter(|e| !e.success).count();
        let dropped = self
            .entries
            .iter()
            .filter(|e| e.event_type == AuditEventType::AssignmentDropped)
            .count();

        AuditStats {
            total_entries: total,
            denial_count: denials,
            dropped_count: dropped,
        }
    }

    /// Export as JSON
    pub fn export_json(&self) -> serde_json::Value {
        serde_json::to_value(self.entries.iter().collect::<Vec<_>>()).unwrap_or_default()
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(10000)
    }
}

/// Audit statistics
#[derive(Debug, Clone)]
pub struct AuditStats {
    pub total_entries: usize,
    pub denial_count: usize,
    /// Assignments silently removed in filter mode
    pub dropped_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RejectionReason;

    fn rejected(key: &str, role: &str) -> RejectedAssignment {
        RejectedAssignment {
            key: key.to_string(),
            reason: RejectionReason::UnapprovedRole {
                role: role.to_string(),
            },
        }
    }

    #[test]
    fn test_log_approved_entry() {
        let mut logger = AuditLogger::new(100);
        logger.log_assignment_approved(
            "app",
            "Key Vault Secrets User",
            "11111111-1111-1111-1111-111111111111",
        );

        let stats = logger.get_stats();
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.denial_count, 0);
        assert_eq!(stats.dropped_count, 0);
    }

    #[test]
    fn test_log_dropped_entry_counts_as_denial() {
        let mut logger = AuditLogger::new(100);
        logger.log_assignment_dropped(&rejected("bad", "Contoso Custom Role"));

        let stats = logger.get_stats();
        assert_eq!(stats.denial_count, 1);
        assert_eq!(stats.dropped_count, 1);

        let denials = logger.get_recent_denials(10);
        assert_eq!(denials.len(), 1);
        assert_eq!(denials[0].assignment_key.as_deref(), Some("bad"));
        assert!(denials[0]
            .reason
            .as_deref()
            .unwrap()
            .contains("Contoso Custom Role"));
    }

    #[test]
    fn test_batch_outcome_events() {
        let mut logger = AuditLogger::new(100);
        logger.log_batch_outcome(true, None);
        logger.log_batch_outcome(false, Some("2 assignments refused"));

        let recent = logger.get_recent(2);
        assert_eq!(recent[0].event_type, AuditEventType::BatchRejected);
        assert_eq!(recent[1].event_type, AuditEventType::BatchValidated);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut logger = AuditLogger::new(3);
        for i in 0..5 {
            logger.log_assignment_approved(
                &format!("key_{}", i),
                "Key Vault Reader",
                "11111111-1111-1111-1111-111111111111",
            );
        }

        let stats = logger.get_stats();
        assert_eq!(stats.total_entries, 3);

        let recent = logger.get_recent(3);
        assert_eq!(recent[0].assignment_key.as_deref(), Some("key_4"));
        assert_eq!(recent[2].assignment_key.as_deref(), Some("key_2"));
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut logger = AuditLogger::new(100);
        logger.log_principal_resolved("11111111-1111-1111-1111-111111111111");
        logger.log_conflict("both access models requested");

        let recent = logger.get_recent(10);
        assert_eq!(recent[0].event_type, AuditEventType::ConflictDetected);
        assert_eq!(recent[1].event_type, AuditEventType::PrincipalResolved);
    }

    #[test]
    fn test_export_json_snake_case_events() {
        let mut logger = AuditLogger::new(10);
        logger.log_assignment_dropped(&rejected("bad", "Owner"));

        let json = logger.export_json().to_string();
        assert!(json.contains("assignment_dropped"));
        assert!(json.contains("\"assignmentKey\":\"bad\""));
    }

    #[test]
    fn test_default_capacity() {
        let logger = AuditLogger::default();
        assert_eq!(logger.get_stats().total_entries, 0);
    }
}
