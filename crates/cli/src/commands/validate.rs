//! vaultguard validate command

use audit::AuditLogger;
use catalog::RoleCatalog;
use clap::Args;
use console::style;
use shared::{CallerIdentity, ConsoleLogger, VaultAccessConfig, VaultGuardError};
use std::path::PathBuf;
use std::sync::Arc;
use validator::{
    AssignmentValidator, CurrentIdentity, EnforcementMode, NoIdentity, StaticIdentity,
    ValidationReport,
};

#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Path to the vault access configuration (JSON or YAML)
    #[arg(short, long)]
    pub config: PathBuf,

    /// Drop rejected assignments instead of failing the batch
    #[arg(long)]
    pub filter: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Caller principal id, overriding the configured identity
    #[arg(long)]
    pub principal_id: Option<String>,

    /// Caller tenant id, used together with --principal-id
    #[arg(long)]
    pub tenant_id: Option<String>,
}

impl ValidateCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = VaultAccessConfig::from_file(&self.config)?;
        tracing::debug!(path = %self.config.display(), "loaded vault access configuration");

        let mode = if self.filter {
            EnforcementMode::Filter
        } else {
            EnforcementMode::HardFail
        };

        let validator = AssignmentValidator::new(
            RoleCatalog::least_privilege(),
            self.identity_source(&config),
            Arc::new(ConsoleLogger),
        )
        .with_mode(mode);

        let mut audit_log = AuditLogger::default();

        match validator.validate(&config) {
            Ok(report) => {
                for approved in &report.approved {
                    audit_log.log_assignment_approved(
                        &approved.key,
                        &approved.role_reference,
                        &approved.principal_id,
                    );
                }
                for rejected in &report.rejected {
                    audit_log.log_assignment_dropped(rejected);
                }
                audit_log.log_batch_outcome(true, None);

                if self.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    render_report(&report);
                    let stats = audit_log.get_stats();
                    if stats.dropped_count > 0 {
                        println!(
                            "{} {} assignment(s) dropped from the batch",
                            style("!").yellow().bold(),
                            stats.dropped_count
                        );
                    }
                }
                Ok(())
            }
            Err(err) => {
                if matches!(err, VaultGuardError::ConflictingAccessModel(_)) {
                    audit_log.log_conflict(&err.to_string());
                }
                audit_log.log_batch_outcome(false, Some(&err.to_string()));

                if !self.json {
                    eprintln!("{} {}", style("✗").red().bold(), err);
                }
                Err(err.into())
            }
        }
    }

    /// Precedence: CLI flags, then the configured identity, then none
    fn identity_source(&self, config: &VaultAccessConfig) -> Arc<dyn CurrentIdentity> {
        if let (Some(principal_id), Some(tenant_id)) = (&self.principal_id, &self.tenant_id) {
            return Arc::new(StaticIdentity::new(CallerIdentity {
                principal_id: principal_id.clone(),
                tenant_id: tenant_id.clone(),
            }));
        }
        if let Some(identity) = &config.current_identity {
            return Arc::new(StaticIdentity::new(identity.clone()));
        }
        Arc::new(NoIdentity)
    }
}

fn render_report(report: &ValidationReport) {
    println!(
        "{} {} assignment(s) approved",
        style("✓").green().bold(),
        report.approved.len()
    );
    for approved in &report.approved {
        println!(
            "  {} {} -> {} ({})",
            style(&approved.key).cyan(),
            approved.role_reference,
            approved.principal_id,
            approved.principal_type
        );
    }

    if !report.rejected.is_empty() {
        println!(
            "{} {} assignment(s) rejected",
            style("✗").red().bold(),
            report.rejected.len()
        );
        for rejected in &report.rejected {
            println!("  {} {}", style(&rejected.key).cyan(), rejected.reason);
        }
    }
}
