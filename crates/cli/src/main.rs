//! VaultGuard CLI - validate Key Vault role assignments before provisioning
//!
//! Usage:
//!   vaultguard validate --config <file>            - Validate a batch (hard-fail)
//!   vaultguard validate --config <file> --filter   - Drop rejected entries instead
//!   vaultguard roles                               - Show the approved catalog
//!   vaultguard name --service kvt --region eastus2 ... - Build a resource name

use clap::{Parser, Subcommand};
use cli::commands::{NameCommand, RolesCommand, ValidateCommand};

#[derive(Parser)]
#[command(name = "vaultguard")]
#[command(about = "Least-privilege RBAC validation for Azure Key Vault")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a vault access configuration
    Validate(ValidateCommand),
    /// Show the approved role catalog
    Roles(RolesCommand),
    /// Build a resource name from convention codes
    Name(NameCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate(cmd) => cmd.run(),
        Commands::Roles(cmd) => cmd.run(),
        Commands::Name(cmd) => cmd.run(),
    }
}
