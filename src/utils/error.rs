//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//! The FLAMES calculation itself has no error type: it cannot fail.

use thiserror::Error;

/// Errors that can occur while storing a calculation
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Backend rejected insert (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to write calculation log: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid share link: {0}")]
    InvalidShareLink(String),
}

/// Errors that can occur while loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
