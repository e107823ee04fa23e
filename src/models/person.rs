//! Person model: a record assembled from validated fields.

use crate::domain::{Address, Email, Name, PersonId, Phone, Printable, Tag, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A person in the address book.
///
/// Every field is an already-validated value object, so a `Person` is valid
/// by construction. Records are replaced rather than edited: use
/// [`Person::with_tags`] to get a copy with a different tag set.
///
/// Serialized records keep the privacy flag of each contact detail, so a
/// stored person reloads with the same fields hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl Person {
    /// Create a new person with no tags.
    pub fn new(id: PersonId, name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            id,
            name,
            phone,
            email,
            address,
            tags: BTreeSet::new(),
        }
    }

    /// Return a copy of this person carrying `tags` instead of the current set.
    pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Lookup key for this record
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Tags applied to the person, ordered by name
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// The contact details in display order.
    pub fn details(&self) -> [&dyn Printable; 3] {
        [&self.phone as &dyn Printable, &self.email, &self.address]
    }

    /// Render every field, private ones included.
    pub fn as_text(&self) -> String {
        let mut text = self.name.to_string();
        for detail in self.details() {
            text.push(' ');
            text.push_str(&detail.printable_string());
        }
        text.push_str(" Tags: ");
        for tag in &self.tags {
            text.push_str(&tag.bracketed());
        }
        text
    }
}

/// Stored form of a contact detail: its canonical text and privacy flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredDetail {
    value: String,
    #[serde(default)]
    private: bool,
}

impl StoredDetail {
    fn of(detail: &dyn Printable) -> Self {
        Self {
            value: detail.value_text().to_string(),
            private: detail.is_private(),
        }
    }
}

/// Persisted shape of a [`Person`]; fields are re-validated on the way back in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: Name,
    phone: StoredDetail,
    email: StoredDetail,
    address: StoredDetail,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            phone: StoredDetail::of(&person.phone),
            email: StoredDetail::of(&person.email),
            address: StoredDetail::of(&person.address),
            id: person.id,
            name: person.name,
            tags: person.tags,
        }
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = ValidationError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let person = Person::new(
            record.id,
            record.name,
            Phone::new(&record.phone.value, record.phone.private)?,
            Email::new(&record.email.value, record.email.private)?,
            Address::new(&record.address.value, record.address.private)?,
        );
        Ok(person.with_tags(record.tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_person() -> Person {
        Person::new(
            PersonId::new("p1").unwrap(),
            Name::new("John Doe").unwrap(),
            Phone::new("98765432", true).unwrap(),
            Email::new("johnd@gmail.com", false).unwrap(),
            Address::new("311, Clementi Ave 2, #02-25, 120311", true).unwrap(),
        )
    }

    #[test]
    fn test_person_as_text_includes_private_fields() {
        let person = sample_person().with_tags([
            Tag::new("owesMoney").unwrap(),
            Tag::new("friends").unwrap(),
        ]);
        assert_eq!(
            person.as_text(),
            "John Doe Phone: 98765432 Email: johnd@gmail.com \
             Address: 311, Clementi Ave 2, #02-25, 120311 Tags: [friends][owesMoney]"
        );
    }

    #[test]
    fn test_with_tags_leaves_original_untouched() {
        let person = sample_person();
        let tagged = person.with_tags([Tag::new("friends").unwrap()]);
        assert!(person.tags().is_empty());
        assert_eq!(tagged.tags().len(), 1);
        assert_eq!(tagged.id(), person.id());
        assert!(tagged.phone().is_private());
    }

    #[test]
    fn test_person_serialization_round_trip() {
        let person = sample_person().with_tags([Tag::new("friends").unwrap()]);
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
        assert!(back.phone().is_private());
        assert!(!back.email().is_private());
        assert!(back.address().is_private());
        assert_eq!(back.tags(), person.tags());
    }

    #[test]
    fn test_person_serialization_keeps_privacy_flags() {
        let json = serde_json::to_value(sample_person()).unwrap();
        assert_eq!(
            json["phone"],
            serde_json::json!({ "value": "98765432", "private": true })
        );
        assert_eq!(
            json["email"],
            serde_json::json!({ "value": "johnd@gmail.com", "private": false })
        );
        assert!(json.get("tags").is_none());
    }

    #[test]
    fn test_person_deserialization_defaults_to_public() {
        let json = r#"{
            "id": "p1",
            "name": "John Doe",
            "phone": { "value": "98765432" },
            "email": { "value": "johnd@gmail.com" },
            "address": { "value": "1, 2, 3, 4", "private": true }
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(!person.phone().is_private());
        assert!(person.address().is_private());
        assert_eq!(person.address().street().as_str(), "2");
    }

    #[test]
    fn test_person_deserialization_rejects_invalid_field() {
        let json = r#"{
            "id": "p1",
            "name": "John Doe",
            "phone": { "value": "not a phone", "private": false },
            "email": { "value": "johnd@gmail.com", "private": false },
            "address": { "value": "1, 2, 3, 4", "private": false }
        }"#;
        let result: Result<Person, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_person_deserialization_rejects_bare_string_detail() {
        let json = r#"{
            "id": "p1",
            "name": "John Doe",
            "phone": "98765432",
            "email": { "value": "johnd@gmail.com" },
            "address": { "value": "1, 2, 3, 4" }
        }"#;
        assert!(serde_json::from_str::<Person>(json).is_err());
    }
}
