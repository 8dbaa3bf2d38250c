//! Core error types for taskline-core.
//!
//! This module defines the error hierarchy using thiserror. Scheduling
//! outcomes ("not enough time", "no free slot") are ordinary result
//! variants, never errors; the types here cover validation, parsing,
//! storage and configuration failures.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskline-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range on an interval-bearing task
    #[error("Invalid time range: start ({start}) must not be after end ({end})")]
    InvalidTimeRange {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    /// Index out of bounds on the task list
    #[error("Task index {index} out of bounds (list holds {len} tasks)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Input parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Unrecognized weekday token for a recurring task
    #[error("Unrecognized weekday: '{0}'")]
    InvalidWeekday(String),

    /// Unrecognized priority token
    #[error("Unrecognized priority: '{0}' (expected high, medium or low)")]
    InvalidPriority(String),

    /// Malformed date-time input
    #[error("Malformed date-time '{input}': expected {expected}")]
    InvalidDateTime { input: String, expected: String },
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the task file
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the task file
    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Task file exists but cannot be decoded
    #[error("Corrupt task file at {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// No usable data directory on this platform
    #[error("Could not determine a data directory")]
    NoDataDir,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
