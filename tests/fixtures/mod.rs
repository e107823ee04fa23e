//! Test fixtures and sample data.
//!
//! Reusable builders for persons, tags and tagging logs.

use addressbook::{Address, Email, Name, Person, PersonId, Phone, Tag};

/// Build a PersonId, panicking on invalid input.
#[allow(dead_code)]
pub fn person_id(id: &str) -> PersonId {
    PersonId::new(id).unwrap()
}

/// Build a Tag, panicking on invalid input.
#[allow(dead_code)]
pub fn tag(name: &str) -> Tag {
    Tag::new(name).unwrap()
}

/// A person with a public phone and private email and address.
#[allow(dead_code)]
pub fn sample_person(id: &str, name: &str) -> Person {
    Person::new(
        person_id(id),
        Name::new(name).unwrap(),
        Phone::new("98765432", false).unwrap(),
        Email::new("someone@example.com", true).unwrap(),
        Address::new("123, Clementi Ave 3, #12-34, 231534", true).unwrap(),
    )
}

/// A person with every field public.
#[allow(dead_code)]
pub fn sample_public_person(id: &str, name: &str) -> Person {
    Person::new(
        person_id(id),
        Name::new(name).unwrap(),
        Phone::new("91234567", false).unwrap(),
        Email::new("public@example.com", false).unwrap(),
        Address::new("1, Main St, #01-01, 111111", false).unwrap(),
    )
}
