//! Address value object and its positional components.

use super::errors::ValidationError;
use super::printable::Printable;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The block number of an address (first component).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block(String);

impl Block {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The street of an address (second component).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Street(String);

impl Street {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unit of an address (third component).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Unit(String);

impl Unit {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The postal code of an address (fourth component).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person's address, decomposed into block, street, unit and postal code.
///
/// Validity is structural only: the trimmed text must split on `", "` into
/// exactly four parts. The parts themselves are not checked, so a postal
/// code of letters is accepted as long as the separators are right.
///
/// Equality and hashing use the full address text; the components are
/// derived from it.
///
/// # Example
///
/// ```
/// use addressbook::domain::Address;
///
/// let address = Address::new("123, Clementi Ave 3, #12-34, 231534", false).unwrap();
/// assert_eq!(address.block().as_str(), "123");
/// assert_eq!(address.postal_code().as_str(), "231534");
///
/// assert!(Address::new("123, some street", false).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Address {
    value: String,
    is_private: bool,
    block: Block,
    street: Street,
    unit: Unit,
    postal_code: PostalCode,
}

impl Address {
    pub const EXAMPLE: &'static str = "123, Clementi Ave 3, #12-34, 231534";
    pub const SEPARATOR: &'static str = ", ";
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Person addresses must be in the BLOCK, STREET, UNIT, POSTAL_CODE format";

    const COMPONENTS: usize = 4;

    /// Trim `raw` and split it into its four components.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Constraint` with the address format message
    /// if the text does not have exactly four components.
    pub fn new(raw: &str, is_private: bool) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        let [block, street, unit, postal_code] = Self::split(trimmed).ok_or_else(|| {
            tracing::debug!("Rejected address {:?}", trimmed);
            ValidationError::Constraint(Self::MESSAGE_CONSTRAINTS.to_string())
        })?;

        Ok(Self {
            value: trimmed.to_string(),
            is_private,
            block: Block(block.to_string()),
            street: Street(street.to_string()),
            unit: Unit(unit.to_string()),
            postal_code: PostalCode(postal_code.to_string()),
        })
    }

    /// Returns true if `text` has exactly four components (no trimming).
    pub fn is_valid(text: &str) -> bool {
        Self::split(text).is_some()
    }

    fn split(text: &str) -> Option<[&str; 4]> {
        let parts: Vec<&str> = text.split(Self::SEPARATOR).collect();
        if parts.len() != Self::COMPONENTS {
            return None;
        }
        Some([parts[0], parts[1], parts[2], parts[3]])
    }

    /// The full trimmed address text.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_private(&self) -> bool {
        self.is_private
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn street(&self) -> &Street {
        &self.street
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Address {}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Printable for Address {
    fn label(&self) -> &'static str {
        "Address"
    }

    fn value_text(&self) -> &str {
        &self.value
    }

    fn is_private(&self) -> bool {
        self.is_private
    }
}

// Serde support - serialize as string
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(&s, false).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
