//! Name value object.

use super::contact::Contact;
use super::contract::ValidationContract;
use super::errors::ValidationError;
use super::printable::Printable;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NAME_CONTRACT: Lazy<ValidationContract> = Lazy::new(|| {
    ValidationContract::new(Name::PATTERN, Name::MESSAGE_CONSTRAINTS)
        .expect("Failed to compile name contract")
});

/// A person's name. Names are always public.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Contact);

impl Name {
    pub const EXAMPLE: &'static str = "John Doe";
    pub const PATTERN: &'static str = r"[[:alnum:] ]+";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person names should be spaces or alphanumeric characters";

    /// Create a new Name, validating the trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` if the name has punctuation or is blank.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Contact::new(raw, false, Self::contract()).map(Self)
    }

    pub fn contract() -> &'static ValidationContract {
        &NAME_CONTRACT
    }

    pub fn is_valid(text: &str) -> bool {
        Self::contract().is_satisfied_by(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Printable for Name {
    fn label(&self) -> &'static str {
        "Name"
    }

    fn value_text(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
