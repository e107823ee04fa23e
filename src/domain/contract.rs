//! ValidationContract: the pattern and message a field kind is checked against.

use crate::error::{ContractError, ContractResult};
use regex::Regex;
use std::fmt;

/// An immutable validation contract for one field kind.
///
/// The pattern is always applied as a full match: `\d+` accepts `"123"` but
/// rejects `"12a"`. Each field kind binds its contract once in a `Lazy`
/// static, and callers may build their own for ad-hoc [`Contact`] kinds.
///
/// [`Contact`]: super::Contact
///
/// # Example
///
/// ```
/// use addressbook::domain::ValidationContract;
///
/// let contract = ValidationContract::new(r"\d+", "Digits only").unwrap();
/// assert!(contract.is_satisfied_by("123"));
/// assert!(!contract.is_satisfied_by("12a"));
/// ```
#[derive(Debug, Clone)]
pub struct ValidationContract {
    pattern: String,
    anchored: Regex,
    message: String,
}

impl ValidationContract {
    /// Build a contract from a pattern and the message shown when it is violated.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::InvalidPattern` if the pattern does not compile
    /// and `ContractError::EmptyMessage` if the message is blank.
    pub fn new(pattern: impl Into<String>, message: impl Into<String>) -> ContractResult<Self> {
        let pattern = pattern.into();
        let message = message.into();

        if message.trim().is_empty() {
            return Err(ContractError::EmptyMessage);
        }

        let anchored = Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
            ContractError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            pattern,
            anchored,
            message,
        })
    }

    /// Returns true if the whole of `text` matches the pattern.
    pub fn is_satisfied_by(&self, text: &str) -> bool {
        self.anchored.is_match(text)
    }

    /// The pattern as written, without anchors.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The human-readable constraint message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/ ({})", self.pattern, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_not_search() {
        let contract = ValidationContract::new(r"\d+", "digits").unwrap();
        assert!(contract.is_satisfied_by("42"));
        assert!(!contract.is_satisfied_by("a42"));
        assert!(!contract.is_satisfied_by("42a"));
        assert!(!contract.is_satisfied_by(""));
    }

    #[test]
    fn test_alternation_is_fully_anchored() {
        // Without the group, `^a|b$` would accept "ax".
        let contract = ValidationContract::new("a|b", "a or b").unwrap();
        assert!(contract.is_satisfied_by("a"));
        assert!(contract.is_satisfied_by("b"));
        assert!(!contract.is_satisfied_by("ax"));
        assert!(!contract.is_satisfied_by("xb"));
    }

    #[test]
    fn test_pattern_permitting_empty() {
        let contract = ValidationContract::new(r"\d*", "optional digits").unwrap();
        assert!(contract.is_satisfied_by(""));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = ValidationContract::new("(unclosed", "broken");
        match result {
            Err(ContractError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
            other => panic!("Expected InvalidPattern, got: {:?}", other),
        }
    }

    #[test]
    fn test_blank_message_rejected() {
        assert!(matches!(
            ValidationContract::new(r"\d+", "  "),
            Err(ContractError::EmptyMessage)
        ));
    }

    #[test]
    fn test_accessors() {
        let contract = ValidationContract::new(r"\d+", "digits").unwrap();
        assert_eq!(contract.pattern(), r"\d+");
        assert_eq!(contract.message(), "digits");
        assert_eq!(contract.to_string(), r"/\d+/ (digits)");
    }
}
