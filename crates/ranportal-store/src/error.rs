//! Error types for configuration storage.

use std::path::PathBuf;

use ranportal_types::ConfigurationId;
use thiserror::Error;

/// Errors that can occur during storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a stored document.
    #[error("Failed to parse configuration file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to serialize a record.
    #[error("Failed to serialize configuration: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A record with this id is already stored.
    #[error("Configuration already exists: {0}")]
    AlreadyExists(ConfigurationId),

    /// An in-memory store lock was poisoned by a panicking writer.
    #[error("Configuration store lock poisoned")]
    LockPoisoned,
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
