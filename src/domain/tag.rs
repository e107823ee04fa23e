//! Tag value object.

use super::contract::ValidationContract;
use super::errors::ValidationError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TAG_CONTRACT: Lazy<ValidationContract> = Lazy::new(|| {
    ValidationContract::new(Tag::PATTERN, Tag::MESSAGE_CONSTRAINTS)
        .expect("Failed to compile tag contract")
});

/// A categorical label attached to person records.
///
/// Tags with the same name are interchangeable. Ordering is by name, so a
/// `BTreeSet<Tag>` lists tags alphabetically.
///
/// # Example
///
/// ```
/// use addressbook::domain::Tag;
///
/// let tag = Tag::new(" friends ").unwrap();
/// assert_eq!(tag.name(), "friends");
/// assert_eq!(tag.bracketed(), "[friends]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const EXAMPLE: &'static str = "friends";
    pub const PATTERN: &'static str = r"[[:alnum:]]+";
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag, validating the trimmed name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` if the name is not alphanumeric.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if !Self::is_valid(trimmed) {
            tracing::debug!("Rejected tag name {:?}", trimmed);
            return Err(ValidationError::Constraint(
                Self::MESSAGE_CONSTRAINTS.to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn contract() -> &'static ValidationContract {
        &TAG_CONTRACT
    }

    pub fn is_valid(name: &str) -> bool {
        Self::contract().is_satisfied_by(name)
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// The tag as shown in listings, e.g. `[friends]`.
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.0)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tag::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
