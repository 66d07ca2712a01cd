//! Page providers: the fetch boundary of the feed.
//!
//! A provider performs the actual page fetch off the owner context and
//! replies over a channel with raw payload bytes; decoding happens back on
//! the owner context so decode errors follow the same path as fetch errors.

mod file;

pub use file::FileProvider;

use crate::feed::PageRequest;
use crate::model::FetchError;
use std::sync::mpsc::Sender;

/// Reply for one issued request: the request it answers plus the raw
/// payload bytes or the fetch failure.
pub type PageReply = (PageRequest, Result<Vec<u8>, FetchError>);

/// Source of review pages.
///
/// `fetch_page` must not block the caller; implementations do their work on
/// their own thread and send exactly one reply per request. A send failure
/// means the session is gone and the reply is discarded.
pub trait ReviewsProvider: Send {
    /// Begin fetching `request`, replying on `reply` when done.
    fn fetch_page(&mut self, request: PageRequest, reply: Sender<PageReply>);
}
