//! NamingConvention - deterministic resource-name construction

use serde::{Deserialize, Serialize};
use shared::VaultGuardError;
use std::collections::HashMap;

/// Vault names must be 3-24 characters, alphanumeric, starting with a letter
const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 24;

/// Input codes for one resource name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameParts {
    /// Service code, e.g. "kvt"
    pub service_code: String,
    /// Full region name, e.g. "eastus2"; translated via the region map
    pub region: String,
    /// Application code, e.g. "pay"
    pub application_code: String,
    /// Objective code, e.g. "sec"
    pub objective_code: String,
    /// Environment code, e.g. "p" or "dev"
    pub environment_code: String,
    /// Sequence number, rendered zero-padded to three digits
    pub correlative: u16,
}

/// Builds resource names from an injected region-code table
#[derive(Debug, Clone)]
pub struct NamingConvention {
    region_codes: HashMap<String, String>,
}

impl NamingConvention {
    pub fn new(region_codes: HashMap<String, String>) -> Self {
        Self { region_codes }
    }

    /// Region-code table for the common Azure regions
    pub fn azure_defaults() -> Self {
        let regions = [
            ("eastus", "eus"),
            ("eastus2", "eu2"),
            ("centralus", "cus"),
            ("northcentralus", "ncu"),
            ("southcentralus", "scu"),
            ("westus", "wus"),
            ("westus2", "wu2"),
            ("westus3", "wu3"),
            ("brazilsouth", "brs"),
            ("northeurope", "neu"),
            ("westeurope", "weu"),
            ("uksouth", "uks"),
            ("southeastasia", "sea"),
            ("eastasia", "eas"),
        ];

        Self::new(
            regions
                .iter()
                .map(|(region, code)| (region.to_string(), code.to_string()))
                .collect(),
        )
    }

    pub fn region_code(&self, region: &str) -> Option<&str> {
        self.region_codes.get(region).map(|c| c.as_str())
    }

    /// Concatenate the codes in convention order:
    /// service, region, application, objective, environment, correlative
    pub fn build(&self, parts: &NameParts) -> shared::Result<String> {
        let region_code = self.region_code(&parts.region).ok_or_else(|| {
            let mut known: Vec<&str> = self.region_codes.keys().map(|k| k.as_str()).collect();
            known.sort_unstable();
            VaultGuardError::Config(format!(
                "unknown region '{}'. Known regions: {}",
                parts.region,
                known.join(", ")
            ))
        })?;

        let name = format!(
            "{}{}{}{}{}{:03}",
            parts.service_code,
            region_code,
            parts.application_code,
            parts.objective_code,
            parts.environment_code,
            parts.correlative
        )
        .to_lowercase();

        if name.len() < MIN_NAME_LEN || name.len() > MAX_NAME_LEN {
            return Err(VaultGuardError::Config(format!(
                "name '{}' is {} characters; must be {}-{}",
                name,
                name.len(),
                MIN_NAME_LEN,
                MAX_NAME_LEN
            )));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VaultGuardError::Config(format!(
                "name '{}' contains non-alphanumeric characters",
                name
            )));
        }
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return Err(VaultGuardError::Config(format!(
                "name '{}' must start with a letter",
                name
            )));
        }

        Ok(name)
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::azure_defaults()
    }
}
