use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Database path is not valid UTF-8: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Invalid server address '{0}'")]
    InvalidAddress(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // Logical failure reported by the server, raised only on request
    #[error("{operation} failed: {message}")]
    Rejected { operation: String, message: String },
}

pub type DriverResult<T> = Result<T, DriverError>;

impl DriverError {
    /// Status code of a non-200 reply, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DriverError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(err: serde_json::Error) -> Self {
        DriverError::Serialization(err.to_string())
    }
}
