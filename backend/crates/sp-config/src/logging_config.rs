use crate::{
    DEFAULT_LOG_COLORED, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL, LogLevel,
};

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored stdout output
    pub colored: bool,
    /// Directory for the log file, relative to the working directory
    pub dir: String,
    /// Log file name. Empty or None disables file logging.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: Some(String::from(DEFAULT_LOG_FILE)),
        }
    }
}

impl LoggingConfig {
    /// Full path of the log file, if file logging is enabled
    pub fn log_file_path(&self) -> Option<PathBuf> {
        match self.file.as_deref() {
            Some(name) if !name.trim().is_empty() => Some(PathBuf::from(&self.dir).join(name)),
            _ => None,
        }
    }
}
