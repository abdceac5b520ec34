use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to open rotating log file {path}: {message}")]
    RotatingFile { path: PathBuf, message: String },

    #[error("Failed to install logger: {message}")]
    Install { message: String },
}

pub type LoggerResult<T> = std::result::Result<T, LoggerError>;
