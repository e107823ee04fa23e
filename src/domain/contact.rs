//! Contact value object: the generic validated, immutable scalar field.

use super::contract::ValidationContract;
use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A trimmed text value that satisfied a [`ValidationContract`] at construction.
///
/// There is no mutator, so a `Contact` is valid for its whole lifetime.
/// Equality and hashing consider only the value; two contacts with the same
/// text but different privacy flags are equal.
///
/// # Example
///
/// ```
/// use addressbook::domain::{Contact, ValidationContract};
///
/// let contract = ValidationContract::new(r"\d+", "Digits only").unwrap();
/// let contact = Contact::new("  98765432 ", true, &contract).unwrap();
/// assert_eq!(contact.as_str(), "98765432");
/// assert!(contact.is_private());
/// ```
#[derive(Debug, Clone)]
pub struct Contact {
    value: String,
    is_private: bool,
}

impl Contact {
    /// Trim `raw` and validate it against `contract`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` carrying the contract's message
    /// if the trimmed text does not fully match the pattern.
    pub fn new(
        raw: &str,
        is_private: bool,
        contract: &ValidationContract,
    ) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if !contract.is_satisfied_by(trimmed) {
            tracing::debug!("Rejected field {:?} against /{}/", trimmed, contract.pattern());
            return Err(ValidationError::Constraint(contract.message().to_string()));
        }

        Ok(Self {
            value: trimmed.to_string(),
            is_private,
        })
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether the display layer should hide this value.
    pub fn is_private(&self) -> bool {
        self.is_private
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Serde support - serialize as string. Deserialization needs a contract, so
// it is provided by the concrete field kinds instead.
impl Serialize for Contact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Display support
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn digits() -> ValidationContract {
        ValidationContract::new(r"\d+", "Digits only").unwrap()
    }

    #[test]
    fn test_contact_trims_before_validation() {
        let contact = Contact::new("\t 123  ", false, &digits()).unwrap();
        assert_eq!(contact.as_str(), "123");
        assert_eq!(contact.to_string(), "123");
    }

    #[test]
    fn test_contact_rejection_carries_message() {
        let err = Contact::new("12 3", false, &digits()).unwrap_err();
        assert_eq!(err, ValidationError::Constraint("Digits only".to_string()));
    }

    #[test]
    fn test_contact_empty_rejected() {
        assert!(Contact::new("   ", false, &digits()).is_err());
    }

    #[test]
    fn test_contact_empty_allowed_when_pattern_permits() {
        let contract = ValidationContract::new(r"\d*", "Optional digits").unwrap();
        let contact = Contact::new("  ", false, &contract).unwrap();
        assert_eq!(contact.as_str(), "");
    }

    #[test]
    fn test_contact_equality_ignores_privacy() {
        let public = Contact::new("123", false, &digits()).unwrap();
        let private = Contact::new(" 123", true, &digits()).unwrap();
        assert_eq!(public, private);

        let mut set = HashSet::new();
        set.insert(public);
        assert!(set.contains(&private));
    }

    #[test]
    fn test_two_kinds_keep_independent_contracts() {
        let letters = ValidationContract::new("[a-z]+", "Letters only").unwrap();
        let numbers = digits();

        assert!(Contact::new("abc", false, &letters).is_ok());
        assert!(Contact::new("123", false, &numbers).is_ok());
        // Building one kind never changes what the other accepts.
        assert!(Contact::new("abc", false, &numbers).is_err());
        assert!(Contact::new("123", false, &letters).is_err());
    }

    #[test]
    fn test_contact_serialization() {
        let contact = Contact::new("123", true, &digits()).unwrap();
        assert_eq!(serde_json::to_string(&contact).unwrap(), "\"123\"");
    }
}
