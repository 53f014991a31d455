//! Core error types for the Aluma client.
//!
//! This module defines transport-agnostic error types. HTTP-specific
//! failures (status codes, connection errors) are classified separately
//! into [`crate::funding::Outcome`] by the funding module; the errors
//! here cover everything that goes wrong before a request is dispatched.

use thiserror::Error;

use crate::funding::FundingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Funding request invalid: {0}")]
    Funding(#[from] FundingError),

    #[error("Unknown investment plan code '{0}'")]
    UnknownPlan(String),

    #[error("A funding submission is already in progress")]
    SubmissionInFlight,

    #[error("Session store error: {0}")]
    Session(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
