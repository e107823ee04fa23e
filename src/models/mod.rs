//! Data models for address book records.
//!
//! This module contains the person record assembled from domain value objects.

pub mod person;

pub use person::Person;
