// src/error.rs
use thiserror::Error;

/// Failures talking to the external schemes API.
///
/// The Display strings are what the chat transcript and the recommendation
/// panel show to the user, so keep them short.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("Request failed: {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
