mod config;
mod error;
mod log_level;
mod logging_config;
mod scim_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use scim_config::ScimConfig;

const CONFIG_DIR_ENV: &str = "SP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sp";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = ".";
const DEFAULT_LOG_FILE: &str = "scim_provision.log";
const DEFAULT_LOG_COLORED: bool = true;
