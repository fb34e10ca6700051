//! Core error types for the Finsight application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by the record store layer.

use chrono::ParseError as ChronoParseError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Goal operation failed: {0}")]
    Goal(#[from] GoalError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Errors originating from goal computations.
#[derive(Error, Debug, PartialEq)]
pub enum GoalError {
    /// A goal must have a positive target amount by construction; progress
    /// against a zero or negative target is undefined.
    #[error("goal '{name}' has non-positive target amount {target_amount}")]
    InvalidTarget { name: String, target_amount: Decimal },
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

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
