//! sp-cli library
//!
//! The SCIM client and provisioning loop behind the `scim-provision` binary,
//! exported for integration tests.

pub mod cli;
pub mod client;
pub mod error;
pub mod logger;
pub mod provision;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError};
pub use error::{CliError, Result as CliResult};
pub use provision::{ProvisionOptions, ProvisionReport, RowOutcome, provision_users};
