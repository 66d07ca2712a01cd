//! Identifier newtype for feed entries.

use std::fmt;

/// Opaque stable identifier for a cell descriptor.
///
/// Assigned once from the feed index's monotonic counter when a record is
/// merged, never reused or changed for the lifetime of the feed session.
/// The raw constructor is crate-private: external code only ever sees ids
/// that were handed out by the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReviewId(u64);

impl ReviewId {
    /// Crate-private constructor; ids come from `FeedIndex` allocation only.
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, for logging and cache keys.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
