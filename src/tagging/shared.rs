//! Thread-safe handle to a tagging log.
//!
//! Appends take the write lock, so every append lands at a single point in
//! one total order. Readers take a snapshot under the read lock and replay
//! that; a snapshot is always a prefix of any later snapshot.

use super::entry::{TagAction, Tagging};
use super::log::{EffectiveTags, TaggingLog};
use crate::domain::{PersonId, Tag};
use std::sync::{Arc, PoisonError, RwLock};

/// A cloneable, shared append-only tagging log.
///
/// Clones share the same underlying log.
#[derive(Debug, Clone, Default)]
pub struct SharedTaggingLog {
    log: Arc<RwLock<TaggingLog>>,
}

impl SharedTaggingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its position in the log.
    ///
    /// A poisoned lock is recovered: entries are immutable, so a panic in
    /// another holder cannot leave a half-written entry behind.
    pub fn append(&self, entry: Tagging) -> usize {
        let mut log = self.log.write().unwrap_or_else(PoisonError::into_inner);
        log.append(entry);
        log.len() - 1
    }

    pub fn record(&self, person: PersonId, tag: Tag, action: TagAction) -> usize {
        self.append(Tagging::new(person, tag, action))
    }

    /// Copy of every entry appended so far.
    pub fn snapshot(&self) -> TaggingLog {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replay a consistent snapshot.
    pub fn effective_tags(&self) -> EffectiveTags {
        self.log
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .effective_tags()
    }

    pub fn len(&self) -> usize {
        self.log.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<TaggingLog> for SharedTaggingLog {
    fn from(log: TaggingLog) -> Self {
        Self {
            log: Arc::new(RwLock::new(log)),
        }
    }
}
