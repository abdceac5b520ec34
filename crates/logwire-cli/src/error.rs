use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that stop the CLI before any sample record is written
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] logwire_config::ConfigError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
        #[source]
        source: logwire::LoggerError,
    },
}

impl From<logwire::LoggerError> for CliError {
    #[track_caller]
    fn from(err: logwire::LoggerError) -> Self {
        CliError::Logger {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type CliResult<T> = std::result::Result<T, CliError>;
