use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("CSV file not found: {path} {location}")]
    NotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("CSV error: {message} {location}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Convert csv error with context, including the line it failed on when known
    #[track_caller]
    pub fn from_csv(err: csv::Error) -> Self {
        let detail = match err.kind() {
            csv::ErrorKind::Io(e) => e.to_string(),
            csv::ErrorKind::Utf8 { err: e, .. } => e.to_string(),
            csv::ErrorKind::UnequalLengths {
                expected_len, len, ..
            } => format!("found record with {} fields, expected {}", len, expected_len),
            csv::ErrorKind::Deserialize { err: e, .. } => e.to_string(),
            _ => err.to_string(),
        };
        let message = match err.position() {
            Some(pos) => format!("line {}: {}", pos.line(), detail),
            None => detail,
        };
        CoreError::Csv {
            message,
            source: err,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<csv::Error> for CoreError {
    #[track_caller]
    fn from(err: csv::Error) -> Self {
        CoreError::from_csv(err)
    }
}

pub type Result<T> = StdResult<T, CoreError>;
