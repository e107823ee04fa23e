//! Phone value object.

use super::contact::Contact;
use super::contract::ValidationContract;
use super::errors::ValidationError;
use super::printable::Printable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_CONTRACT: Lazy<ValidationContract> = Lazy::new(|| {
    ValidationContract::new(Phone::PATTERN, Phone::MESSAGE_CONSTRAINTS)
        .expect("Failed to compile phone contract")
});

/// A person's phone number.
///
/// Phone numbers are ASCII digits only; formatting characters are rejected
/// rather than stripped.
///
/// # Example
///
/// ```
/// use addressbook::domain::Phone;
///
/// let phone = Phone::new(" 98765432 ", false).unwrap();
/// assert_eq!(phone.as_str(), "98765432");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(Contact);

impl Phone {
    pub const EXAMPLE: &'static str = "123456789";
    pub const PATTERN: &'static str = "[0-9]+";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Person phone numbers should only contain numbers";

    /// Create a new Phone, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` if the number has anything but digits.
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        Contact::new(raw, is_private, Self::contract()).map(Self)
    }

    /// The contract shared by every phone number.
    pub fn contract() -> &'static ValidationContract {
        &PHONE_CONTRACT
    }

    /// Returns true if `text` is a valid phone number as given (no trimming).
    pub fn is_valid(text: &str) -> bool {
        Self::contract().is_satisfied_by(text)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_private(&self) -> bool {
        self.0.is_private()
    }
}

impl Printable for Phone {
    fn label(&self) -> &'static str {
        "Phone"
    }

    fn value_text(&self) -> &str {
        self.as_str()
    }

    fn is_private(&self) -> bool {
        self.0.is_private()
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s, false).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
