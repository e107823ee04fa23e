//! Tagging log entries.

use crate::domain::{PersonId, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happened to a tag on a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TagAction {
    Add,
    Remove,
}

impl TagAction {
    /// The persisted name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagAction::Add => "ADD",
            TagAction::Remove => "REMOVE",
        }
    }

    /// The sign used in session summaries.
    pub fn symbol(&self) -> char {
        match self {
            TagAction::Add => '+',
            TagAction::Remove => '-',
        }
    }
}

impl fmt::Display for TagAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(TagAction::Add),
            "REMOVE" => Ok(TagAction::Remove),
            other => Err(format!("Unknown tag action: {}", other)),
        }
    }
}

/// One tag mutation: `action` was applied to `tag` on `person`.
///
/// An entry does no validation of its own; both the person key and the tag
/// were validated when they were built. Entries are never changed after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tagging {
    person: PersonId,
    tag: Tag,
    action: TagAction,
}

impl Tagging {
    pub fn new(person: PersonId, tag: Tag, action: TagAction) -> Self {
        Self {
            person,
            tag,
            action,
        }
    }

    /// The person the tag was applied to or removed from.
    pub fn person(&self) -> &PersonId {
        &self.person
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn action(&self) -> TagAction {
        self.action
    }
}

impl fmt::Display for Tagging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.action.symbol(),
            self.tag.bracketed(),
            self.person
        )
    }
}
