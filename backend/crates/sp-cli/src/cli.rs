use sp_config::{Config, LogLevel};

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "scim-provision")]
#[command(about = "Create users from a CSV file through a SCIM 2.0 endpoint")]
#[command(version)]
pub struct Cli {
    /// Path to the CSV file containing user data
    #[arg(long)]
    pub csv: PathBuf,

    /// Identity host URL (overrides scim.url / SP_SCIM_URL)
    #[arg(long)]
    pub url: Option<String>,

    /// Enterprise slug (overrides scim.enterprise / SP_SCIM_ENTERPRISE)
    #[arg(long)]
    pub enterprise: Option<String>,

    /// Token with SCIM scope (overrides scim.token / SP_SCIM_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Look users up and report what would be created, without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Log file name inside the log directory; pass an empty value to disable
    #[arg(long)]
    pub log_file: Option<String>,
}

impl Cli {
    /// Apply command-line values on top of file and environment config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref url) = self.url {
            config.scim.url = url.clone();
        }
        if let Some(ref enterprise) = self.enterprise {
            config.scim.enterprise = enterprise.clone();
        }
        if let Some(ref token) = self.token {
            config.scim.token = Some(token.clone());
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
        if let Some(ref file) = self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
