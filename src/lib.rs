//! revfeed: incremental review feed engine.
//!
//! The crate implements the two pieces of a paginated review list that carry
//! real invariants:
//!
//! - a pagination/state controller ([`feed::FeedController`]) that fetches,
//!   merges, and exposes pages of review data with an
//!   at-most-one-outstanding-request guarantee, and
//! - a deterministic variable-height layout calculator
//!   ([`layout::compute_layout`]) that turns a review's textual content plus
//!   a container width into cell geometry: whether the text is truncated,
//!   the resulting cell height, and the frame of every sub-element.
//!
//! Everything that touches a rendering surface or a network socket lives
//! behind injected capability traits ([`provider::ReviewsProvider`],
//! [`rating::RatingRenderer`], [`image::ImageStore`]); the core consumes
//! plain data and emits plain geometry and state.

pub mod config;
pub mod feed;
pub mod image;
pub mod layout;
pub mod logging;
pub mod model;
pub mod parser;
pub mod provider;
pub mod rating;
