//! Domain model types (pure).
//!
//! All types in this module are pure data: the review records as decoded
//! from a page payload, the identifier newtype for feed entries, and the
//! error taxonomy.

pub mod error;
pub mod identifiers;
pub mod review;

// Re-export for convenience
pub use error::{DecodeError, FeedError, FetchError};
pub use identifiers::ReviewId;
pub use review::{ReviewRecord, ReviewsPage};
