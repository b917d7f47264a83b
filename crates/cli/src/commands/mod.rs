//! vaultguard commands

pub mod name;
pub mod roles;
pub mod validate;

pub use name::NameCommand;
pub use roles::RolesCommand;
pub use validate::ValidateCommand;
