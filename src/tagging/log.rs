//! Append-only tagging log and last-write-wins replay.

use super::entry::{TagAction, Tagging};
use crate::domain::{PersonId, Tag};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Tag membership reconstructed from a log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveTags {
    by_person: BTreeMap<PersonId, BTreeSet<Tag>>,
}

impl EffectiveTags {
    /// Tags currently applied to `person` (empty if none).
    pub fn tags_for(&self, person: &PersonId) -> BTreeSet<Tag> {
        self.by_person.get(person).cloned().unwrap_or_default()
    }

    pub fn is_tagged(&self, person: &PersonId, tag: &Tag) -> bool {
        self.by_person
            .get(person)
            .is_some_and(|tags| tags.contains(tag))
    }

    /// People with at least one tag, in key order.
    pub fn people(&self) -> impl Iterator<Item = &PersonId> {
        self.by_person.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &BTreeSet<Tag>)> {
        self.by_person.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.by_person.is_empty()
    }

    fn apply(&mut self, entry: &Tagging) {
        match entry.action() {
            TagAction::Add => {
                self.by_person
                    .entry(entry.person().clone())
                    .or_default()
                    .insert(entry.tag().clone());
            }
            TagAction::Remove => {
                if let Some(tags) = self.by_person.get_mut(entry.person()) {
                    tags.remove(entry.tag());
                    if tags.is_empty() {
                        self.by_person.remove(entry.person());
                    }
                }
            }
        }
    }
}

/// Replay `entries` in order.
///
/// For every (person, tag) pair the most recent entry wins: the tag is
/// present iff that entry is an `Add`. Removing a tag that was never added
/// is a no-op.
pub fn replay<'a, I>(entries: I) -> EffectiveTags
where
    I: IntoIterator<Item = &'a Tagging>,
{
    let mut effective = EffectiveTags::default();
    for entry in entries {
        trace!("Replaying {}", entry);
        effective.apply(entry);
    }
    effective
}

/// An append-only sequence of tag mutations.
///
/// There is no way to remove or edit an entry once recorded; the log lives
/// as long as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggingLog {
    entries: Vec<Tagging>,
}

impl TaggingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an already-built entry.
    pub fn append(&mut self, entry: Tagging) {
        debug!("Tagging log append: {}", entry);
        self.entries.push(entry);
    }

    /// Build and append an entry, returning a reference to it.
    pub fn record(&mut self, person: PersonId, tag: Tag, action: TagAction) -> &Tagging {
        self.append(Tagging::new(person, tag, action));
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Tagging] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tagging> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replay the whole log.
    pub fn effective_tags(&self) -> EffectiveTags {
        replay(&self.entries)
    }

    pub fn tags_for(&self, person: &PersonId) -> BTreeSet<Tag> {
        replay(self.entries.iter().filter(|e| e.person() == person)).tags_for(person)
    }

    /// Whether the most recent entry for (person, tag) is an `Add`.
    pub fn is_tagged(&self, person: &PersonId, tag: &Tag) -> bool {
        self.entries
            .iter()
            .rev()
            .find(|e| e.person() == person && e.tag() == tag)
            .is_some_and(|e| e.action() == TagAction::Add)
    }

    /// One line per entry, e.g. `+ [friends] p1`.
    pub fn summary(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a TaggingLog {
    type Item = &'a Tagging;
    type IntoIter = std::slice::Iter<'a, Tagging>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Tagging> for TaggingLog {
    fn from_iter<T: IntoIterator<Item = Tagging>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
