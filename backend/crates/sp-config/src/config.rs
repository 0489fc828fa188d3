use crate::{
    CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    LoggingConfig, ScimConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scim: ScimConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SP_CONFIG_DIR env var, else use ./.sp/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply SP_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load() and after any
    /// command-line overrides have been applied.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SP_CONFIG_DIR env var > ./.sp/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.scim.validate()?;

        if let Some(ref file) = self.logging.file
            && (file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(format!(
                "logging.file must be a file name, use logging.dir for the directory, got {}",
                file
            )));
        }

        Ok(())
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  scim endpoint: {}", self.scim.users_endpoint());
        info!(
            "  scim token: {}",
            if self.scim.token.is_some() {
                "set"
            } else {
                "missing"
            }
        );
        info!("  scim timeout: {}s", self.scim.timeout_secs);

        match self.logging.log_file_path() {
            Some(path) => info!(
                "  logging: {} (colored: {}, file: {})",
                *self.logging.level,
                self.logging.colored,
                path.display()
            ),
            None => info!(
                "  logging: {} (colored: {}, no file)",
                *self.logging.level, self.logging.colored
            ),
        }
    }

    fn apply_env_overrides(&mut self) {
        // SCIM
        Self::apply_env_string("SP_SCIM_URL", &mut self.scim.url);
        Self::apply_env_string("SP_SCIM_ENTERPRISE", &mut self.scim.enterprise);
        Self::apply_env_option_string("SP_SCIM_TOKEN", &mut self.scim.token);
        Self::apply_env_parse("SP_SCIM_TIMEOUT_SECS", &mut self.scim.timeout_secs);

        // Logging
        Self::apply_env_parse("SP_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SP_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("SP_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("SP_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
