//! Domain value objects and types.
//!
//! Every person detail enters the system through a constructor in this
//! module. Constructors trim their input, check it against the field kind's
//! contract, and either return an immutable value or a `ValidationError`;
//! there is no partially built field.

pub mod address;
pub mod contact;
pub mod contract;
pub mod email;
pub mod errors;
pub mod name;
pub mod person_id;
pub mod phone;
pub mod printable;
pub mod tag;

pub use address::{Address, Block, PostalCode, Street, Unit};
pub use contact::Contact;
pub use contract::ValidationContract;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use person_id::PersonId;
pub use phone::Phone;
pub use printable::Printable;
pub use tag::Tag;
