//! Unified error types for the registry.
//!
//! Validation errors (`MissingRequiredField`, `DuplicateSerialNumber`,
//! `EmptyStore`) are detected before any state mutation and surfaced to the
//! user as a blocking message; the store stays in its prior state.

use thiserror::Error;

/// All errors produced by the registry.
#[derive(Debug, Error)]
pub enum Error {
    /// A required registration or approval field was empty.
    #[error("Required field '{field}' must not be empty")]
    MissingRequiredField {
        /// Wire name of the offending field.
        field: &'static str,
    },

    /// The candidate serial number is already registered.
    #[error("A machine with serial number '{serial}' is already registered")]
    DuplicateSerialNumber {
        /// The rejected serial number.
        serial: String,
    },

    /// The operation needs at least one registered machine.
    #[error("No machines are registered")]
    EmptyStore,

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem.
        message: String,
    },

    /// Database error from the storage layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A blob or export document failed to (de)serialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing an export or report file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
