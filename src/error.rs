//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;
use crate::models::transaction::TransactionValidationError;

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The persisted file exists but does not hold a list of transactions
    #[error("Data file {path} is corrupted: {reason}")]
    Corrupted { path: String, reason: String },

    /// Amount input that is not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Amount that is zero or negative
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Audit log errors
    #[error("Audit error: {0}")]
    Audit(String),
}

impl TrackerError {
    /// Check if this is a validation error (including amount rejections)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::InvalidAmount(_) | Self::NonPositiveAmount(_)
        )
    }

    /// Check if this error means the persisted file is unreadable as data
    pub fn is_corrupted(&self) -> bool {
        matches!(self, Self::Corrupted { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for TrackerError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

impl From<TransactionValidationError> for TrackerError {
    fn from(err: TransactionValidationError) -> Self {
        match err {
            TransactionValidationError::NonPositiveAmount(amount) => {
                Self::NonPositiveAmount(amount.to_string())
            }
        }
    }
}

/// Result type alias for finance tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;
