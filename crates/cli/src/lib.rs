//! # VaultGuard CLI
//!
//! Command implementations for the `vaultguard` binary.

pub mod commands;
