//! Address Book - validated, privacy-aware contact records.
//!
//! Raw text becomes a person detail only by passing through a constructor in
//! [`domain`]; once built, a value is immutable and trusted. Tag changes are
//! recorded in an append-only [`tagging`] log and current membership is
//! recovered by replay.
//!
//! # Architecture
//!
//! - **domain**: Value objects (contact, phone, email, name, address, tag) and their contracts
//! - **models**: The person record assembled from value objects
//! - **tagging**: Tagging entries, the append-only log and replay
//! - **ui**: Console formatting and line-oriented I/O
//! - **error**: Crate-level error types
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod tagging;
pub mod ui;

pub use config::Config;
pub use domain::{
    Address, Contact, Email, Name, PersonId, Phone, Printable, Tag, ValidationContract,
    ValidationError,
};
pub use error::{ConfigError, ContractError, UiError};
pub use models::Person;
pub use tagging::{replay, EffectiveTags, SharedTaggingLog, TagAction, Tagging, TaggingLog};
pub use ui::{Formatter, TextUi};
