//! Email value object.

use super::contact::Contact;
use super::contract::ValidationContract;
use super::errors::ValidationError;
use super::printable::Printable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static EMAIL_CONTRACT: Lazy<ValidationContract> = Lazy::new(|| {
    ValidationContract::new(Email::PATTERN, Email::MESSAGE_CONSTRAINTS)
        .expect("Failed to compile email contract")
});

/// A person's email address.
///
/// The check is structural: one '@' between two runs of ASCII letters,
/// digits, underscores and periods. Nothing is resolved or normalised.
///
/// # Example
///
/// ```
/// use addressbook::domain::Email;
///
/// let email = Email::new("valid@e.mail", false).unwrap();
/// assert_eq!(email.as_str(), "valid@e.mail");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(Contact);

impl Email {
    pub const EXAMPLE: &'static str = "valid@e.mail";
    pub const PATTERN: &'static str = "[A-Za-z0-9_.]+@[A-Za-z0-9_.]+";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person emails should be 2 alphanumeric/period strings separated by '@'";

    /// Create a new Email, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` if the format is invalid.
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        Contact::new(raw, is_private, Self::contract()).map(Self)
    }

    /// The contract shared by every email address.
    pub fn contract() -> &'static ValidationContract {
        &EMAIL_CONTRACT
    }

    /// Returns true if `text` is a valid email as given (no trimming).
    pub fn is_valid(text: &str) -> bool {
        Self::contract().is_satisfied_by(text)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_private(&self) -> bool {
        self.0.is_private()
    }
}

impl Printable for Email {
    fn label(&self) -> &'static str {
        "Email"
    }

    fn value_text(&self) -> &str {
        self.as_str()
    }

    fn is_private(&self) -> bool {
        self.0.is_private()
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(&s, false).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
