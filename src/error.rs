//! Error types for the address book.
//!
//! This module defines crate-level error types using `thiserror`. Field
//! validation failures live in [`crate::domain::ValidationError`].

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while building a validation contract.
#[derive(Error, Debug)]
pub enum ContractError {
    /// The pattern is not a valid regular expression
    #[error("Invalid validation pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The constraint message is blank
    #[error("Constraint message cannot be empty")]
    EmptyMessage,
}

/// Errors that can occur on the text console.
#[derive(Error, Debug)]
pub enum UiError {
    /// Reading from or writing to the console failed
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream was closed
    #[error("End of input")]
    EndOfInput,
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContractError
pub type ContractResult<T> = Result<T, ContractError>;

/// Convenience type alias for Results with UiError
pub type UiResult<T> = Result<T, UiError>;
