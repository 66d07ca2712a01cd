//! Feed layer: descriptors, index, pagination, and expand handling.
//!
//! # Module Structure
//!
//! - `descriptor`: `CellDescriptor`, `SummaryDescriptor`, `FeedEntry`
//! - `index`: `FeedIndex`, the ordered, id-addressable descriptor store
//! - `state`: `FeedState` + `PageRequest` (pagination bookkeeping)
//! - `events`: `FeedEvent` notifications and `FeedCommand` messages
//! - `controller`: `FeedController`, the single mutation context
//! - `session`: `FeedSession`, impure shell wiring provider and channels
//! - `prefetch`: scroll-driven prefetch trigger predicate

pub mod controller;
pub mod descriptor;
pub mod events;
pub mod index;
pub mod prefetch;
pub mod session;
pub mod state;

pub use controller::FeedController;
pub use descriptor::{CellDescriptor, FeedEntry, SummaryDescriptor};
pub use events::{FeedCommand, FeedEvent};
pub use index::FeedIndex;
pub use prefetch::should_request_next_page;
pub use session::FeedSession;
pub use state::{FeedState, PageRequest};
