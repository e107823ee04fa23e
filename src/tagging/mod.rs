//! Tag mutation history.
//!
//! A tagging log records which tags were added to or removed from which
//! person during a session. Current membership is never stored; it is
//! recovered by replaying the log.

pub mod entry;
pub mod log;
pub mod shared;

pub use entry::{TagAction, Tagging};
pub use log::{replay, EffectiveTags, TaggingLog};
pub use shared::SharedTaggingLog;
