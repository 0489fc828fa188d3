use crate::ClientError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] sp_config::ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] sp_core::CoreError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
