//! Tests for contract-validated fields: Contact and its phone, email, name and tag kinds.

use addressbook::{Contact, Email, Name, Phone, Tag, ValidationContract, ValidationError};
use proptest::prelude::*;

fn postal_code_contract() -> ValidationContract {
    ValidationContract::new(r"\d{6}", "Postal codes should be 6 digits").unwrap()
}

#[test]
fn test_custom_contract_message_surfaces() {
    let err = Contact::new("12345", false, &postal_code_contract()).unwrap_err();
    assert_eq!(err.to_string(), "Postal codes should be 6 digits");
}

#[test]
fn test_builtin_contracts_are_independent() {
    // Building a custom kind never changes what the built-in kinds accept.
    let custom = ValidationContract::new("[a-z]+", "Lowercase only").unwrap();
    assert!(Contact::new("abc", false, &custom).is_ok());
    assert!(Phone::new("abc", false).is_err());
    assert!(Phone::new("123", false).is_ok());
    assert_eq!(Phone::contract().pattern(), "[0-9]+");
}

#[test]
fn test_kind_messages() {
    assert_eq!(
        Phone::new("x", false).unwrap_err().message(),
        Phone::MESSAGE_CONSTRAINTS
    );
    assert_eq!(
        Email::new("x", false).unwrap_err().message(),
        Email::MESSAGE_CONSTRAINTS
    );
    assert_eq!(Name::new("x!").unwrap_err().message(), Name::MESSAGE_CONSTRAINTS);
    assert_eq!(Tag::new("x!").unwrap_err().message(), Tag::MESSAGE_CONSTRAINTS);
}

#[test]
fn test_examples_are_valid() {
    assert!(Phone::new(Phone::EXAMPLE, false).is_ok());
    assert!(Email::new(Email::EXAMPLE, false).is_ok());
    assert!(Name::new(Name::EXAMPLE).is_ok());
    assert!(Tag::new(Tag::EXAMPLE).is_ok());
}

/// Property: a phone is accepted iff its trimmed text is non-empty ASCII digits.
#[test]
fn prop_phone_accepts_exactly_digit_strings() {
    proptest!(|(raw in "[ 0-9a-z+\\-٠-٩０-９۱-۳]{0,12}")| {
        let trimmed = raw.trim();
        let expected = !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit());
        prop_assert_eq!(Phone::new(&raw, false).is_ok(), expected);
    });
}

/// Property: an email is accepted iff both sides of its single '@' are
/// non-empty runs of ASCII letters, digits, '_' and '.'.
#[test]
fn prop_email_accepts_only_ascii_word_characters() {
    proptest!(|(local in "[a-zA-Z0-9_.éäü]{0,6}", domain in "[a-zA-Z0-9_.éäü]{0,6}")| {
        let allowed = |part: &str| {
            !part.is_empty()
                && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        };
        let expected = allowed(&local) && allowed(&domain);
        prop_assert_eq!(Email::new(&format!("{}@{}", local, domain), false).is_ok(), expected);
    });
}

/// Property: surrounding whitespace never changes the outcome or the value.
#[test]
fn prop_whitespace_is_stripped_before_validation() {
    proptest!(|(core in "[0-9a-z]{0,8}", lead in "[ \t\n]{0,3}", trail in "[ \t\n]{0,3}")| {
        let padded = format!("{}{}{}", lead, core, trail);
        let bare = Contact::new(&core, false, &postal_code_contract());
        let wrapped = Contact::new(&padded, false, &postal_code_contract());
        prop_assert_eq!(bare, wrapped);
    });
}

/// Property: equality ignores the privacy flag.
#[test]
fn prop_equality_ignores_privacy() {
    proptest!(|(digits in "[0-9]{1,10}", a in any::<bool>(), b in any::<bool>())| {
        prop_assert_eq!(Phone::new(&digits, a).unwrap(), Phone::new(&digits, b).unwrap());
    });
}

/// Property: rebuilding any field from its canonical text gives an equal field.
#[test]
fn prop_round_trip_through_display() {
    proptest!(|(
        phone in "[0-9]{1,10}",
        local in "[a-z0-9._]{1,8}",
        domain in "[a-z0-9.]{1,8}",
        name in "[A-Za-z0-9]{1,6}( [A-Za-z0-9]{1,6}){0,2}",
        private in any::<bool>(),
    )| {
        let phone = Phone::new(&phone, private).unwrap();
        prop_assert_eq!(&Phone::new(&phone.to_string(), private).unwrap(), &phone);

        let email = Email::new(&format!("{}@{}", local, domain), private).unwrap();
        prop_assert_eq!(&Email::new(&email.to_string(), private).unwrap(), &email);

        let name = Name::new(&name).unwrap();
        prop_assert_eq!(&Name::new(&name.to_string()).unwrap(), &name);
    });
}

#[test]
fn test_serde_uses_canonical_text() {
    let email = Email::new("  a.b@c.d ", true).unwrap();
    let json = serde_json::to_string(&email).unwrap();
    assert_eq!(json, "\"a.b@c.d\"");

    let back: Email = serde_json::from_str(&json).unwrap();
    assert_eq!(back, email);
    assert!(!back.is_private());
}

#[test]
fn test_empty_pattern_accepts_only_blank_input() {
    let contract = ValidationContract::new("", "Must be blank").unwrap();
    let blank = Contact::new("   ", true, &contract).unwrap();
    assert_eq!(blank.as_str(), "");
    assert_eq!(
        Contact::new("x", false, &contract),
        Err(ValidationError::Constraint("Must be blank".to_string()))
    );
}
