//! Error types for stashkit core
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::limits::LimitError;
use std::io;
use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for configuration and limit checks
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error reading or writing a config file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be parsed or serialized
    #[error("config error: {0}")]
    Config(String),

    /// A size limit was exceeded
    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
