//! PersonId: the back-reference from log entries to person records.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The key a tagging entry uses to name the person it applies to.
///
/// An id is a plain value. It neither owns nor borrows the `Person` it
/// names, so log entries stay valid after the record is replaced or
/// removed; resolving an id back to a record is the caller's lookup.
///
/// Ids are compared on their trimmed text and ordered lexicographically,
/// which keeps replay output in a stable per-person order.
///
/// # Example
///
/// ```
/// use addressbook::domain::PersonId;
///
/// let typed = PersonId::new(" p42 ").unwrap();
/// let stored = PersonId::new("p42").unwrap();
/// assert_eq!(typed, stored);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Build a key from user or stored input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if nothing is left after trimming.
    pub fn new(id: &str) -> Result<Self, ValidationError> {
        match id.trim() {
            "" => Err(ValidationError::EmptyId),
            key => Ok(Self(key.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PersonId {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
