//! vaultguard name command

use clap::Args;
use naming::{NameParts, NamingConvention};

#[derive(Debug, Args)]
pub struct NameCommand {
    /// Service code, e.g. kvt
    #[arg(long)]
    pub service: String,

    /// Full region name, e.g. eastus2
    #[arg(long)]
    pub region: String,

    /// Application code, e.g. pay
    #[arg(long)]
    pub application: String,

    /// Objective code, e.g. sec
    #[arg(long)]
    pub objective: String,

    /// Environment code, e.g. p
    #[arg(long)]
    pub environment: String,

    /// Sequence number
    #[arg(long, default_value_t = 1)]
    pub correlative: u16,
}

impl NameCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let convention = NamingConvention::azure_defaults();
        let name = convention.build(&NameParts {
            service_code: self.service.clone(),
            region: self.region.clone(),
            application_code: self.application.clone(),
            objective_code: self.objective.clone(),
            environment_code: self.environment.clone(),
            correlative: self.correlative,
        })?;

        println!("{}", name);
        Ok(())
    }
}
