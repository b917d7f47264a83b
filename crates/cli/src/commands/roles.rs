//! vaultguard roles command

use catalog::RoleCatalog;
use clap::Args;
use console::style;

#[derive(Debug, Args)]
pub struct RolesCommand {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

impl RolesCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let catalog = RoleCatalog::least_privilege();

        if self.json {
            println!("{}", serde_json::to_string_pretty(catalog.entries())?);
            return Ok(());
        }

        println!("Approved data-plane roles:");
        for entry in catalog.entries() {
            println!(
                "  {:<42} {} ({})",
                style(&entry.role_name).green(),
                entry.role_id,
                entry.tier
            );
        }

        println!();
        println!("Monitoring roles (always approved):");
        for role in catalog.monitoring_roles() {
            println!("  {}", role);
        }

        println!();
        println!("Blocked roles (never approved):");
        for role in catalog.blocked_roles() {
            println!("  {}", style(role).red());
        }

        Ok(())
    }
}
