//! Core error types for the Folio application.
//!
//! These errors are storage-agnostic. Storage adapters convert their own
//! failures into [`Error::Repository`] or [`Error::Snapshot`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
///
/// Only `Validation` and `NotFound` are client-facing; unresolvable asset
/// references and zero totals are handled inside the engine and never
/// surface as errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

/// Errors raised while loading or validating a reference-data snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse snapshot: {0}")]
    Parse(String),

    #[error("Holding {asset_id} in wallet {wallet} of user {user_id} has negative amount {amount}")]
    NegativeAmount {
        user_id: String,
        wallet: String,
        asset_id: String,
        amount: String,
    },

    #[error("Invalid snapshot data: {0}")]
    Invalid(String),
}

impl Error {
    /// Shorthand for an invalid-input validation error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }

    /// True when the error was caused by the caller, not by the data source.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::NotFound(_))
    }
}
