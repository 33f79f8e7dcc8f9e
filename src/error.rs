//! Custom error types for the budget tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (reading or writing the ledger file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The ledger file exists but does not match the expected schema
    #[error("Ledger file is malformed: {0}")]
    ParseFailure(String),

    /// No transaction with the given id
    #[error("Transaction not found: {id}")]
    NotFound { id: u64 },

    /// A value could not be coerced to the type its field requires
    #[error("Invalid {field} value: '{value}'")]
    InvalidValue { field: String, value: String },

    /// Filtering or enumeration requested on a field that does not support it
    #[error("Cannot filter by '{0}': only Type or Category are supported")]
    UnsupportedField(String),

    /// A listing or summary was requested over zero transactions
    #[error("No transactions found")]
    EmptyCollection,
}

impl BudgetError {
    /// Create a "not found" error for a transaction id
    pub fn not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Create an "invalid value" error for a named field
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is the "no transactions" condition
    pub fn is_empty_collection(&self) -> bool {
        matches!(self, Self::EmptyCollection)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::ParseFailure(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::not_found(7);
        assert_eq!(err.to_string(), "Transaction not found: 7");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_value_error() {
        let err = BudgetError::invalid_value("Amount", "abc");
        assert_eq!(err.to_string(), "Invalid Amount value: 'abc'");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
