//! Feed notifications and commands.
//!
//! Interaction is message passing in both directions: the controller emits
//! [`FeedEvent`]s to observers, and interaction sources (an affordance tap,
//! a pull-to-refresh gesture) send [`FeedCommand`]s carrying an id payload
//! instead of holding a reference to the controller. Descriptors stay plain
//! data and never capture a callback.

use crate::model::ReviewId;

/// Notification emitted by the controller after any state mutation.
///
/// Observers poll the feed on receipt; the event intentionally carries no
/// snapshot so a late delivery to a discarded observer has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    /// Entries, pagination state, or a descriptor's truncation changed.
    StateChanged,
}

/// Command delivered into the feed's mutation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
    /// Lift the line limit on the identified entry.
    Expand(ReviewId),
    /// Re-issue the next page request (manual refresh or retry).
    Refresh,
}
