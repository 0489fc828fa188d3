//! scim-provision - create users in an identity system from a CSV file
//!
//! Reads rows from a CSV file, maps each into a SCIM User resource, and
//! creates the user unless one with the same userName already exists.
//!
//! # Examples
//!
//! ```bash
//! # Create users
//! scim-provision --csv users.csv --url https://api.github.com --enterprise acme --token $TOKEN
//!
//! # See what would be created
//! SP_SCIM_TOKEN=... scim-provision --csv users.csv --dry-run
//! ```

use sp_cli::{
    CliResult, Client, ProvisionOptions, ProvisionReport, cli::Cli, logger, provision_users,
};
use sp_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            eprintln!("Error: {} of {} rows failed", report.failed, report.total());
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("An error occurred: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ProvisionReport> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.logging.log_file_path(),
        config.logging.colored,
    )?;

    info!("Starting scim-provision v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let records = sp_core::read_csv_file(&cli.csv)?;
    if records.is_empty() {
        warn!("No users found in CSV file");
        return Ok(ProvisionReport::default());
    }
    info!("Read {} rows from {}", records.len(), cli.csv.display());

    let client = Client::from_config(&config.scim)?;

    let options = ProvisionOptions {
        dry_run: cli.dry_run,
    };
    if options.dry_run {
        warn!("Dry run: no users will be created");
    }

    let report = provision_users(&client, &records, &options).await;

    info!("Completed user creation operation");
    println!("{}", report);

    Ok(report)
}
