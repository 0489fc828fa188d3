pub(crate) mod provision_report;
pub(crate) mod provisioner;

pub use provision_report::{ProvisionReport, RowOutcome};
pub use provisioner::{ProvisionOptions, provision_users};
