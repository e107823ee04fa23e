//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input did not satisfy the field's contract. Carries the
    /// human-readable constraint message for that field kind.
    Constraint(String),

    /// The provided ID is empty.
    EmptyId,
}

impl ValidationError {
    /// The message to surface to the end user.
    pub fn message(&self) -> &str {
        match self {
            Self::Constraint(message) => message,
            Self::EmptyId => "ID cannot be empty",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}
