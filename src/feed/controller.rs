//! Feed controller: the single mutation context for feed state.
//!
//! All state transitions (page application, expansion) happen through one
//! controller owned by one context; collaborators on other threads reach it
//! with [`FeedCommand`]s rather than shared references. That makes the
//! at-most-one-outstanding-fetch guarantee a plain field check instead of a
//! synchronization problem.

use crate::feed::events::{FeedCommand, FeedEvent};
use crate::feed::index::FeedIndex;
use crate::feed::state::{FeedState, PageRequest};
use crate::model::{FeedError, ReviewId, ReviewsPage};
use crate::rating::RatingRenderer;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, warn};

/// Owns pagination state and the descriptor index, and applies every
/// mutation in arrival order.
///
/// The controller is deliberately free of I/O: `request_next_page` only
/// decides whether a fetch should happen and hands back the request to
/// issue. The impure shell ([`FeedSession`](crate::feed::FeedSession))
/// performs the fetch and routes the outcome back into
/// [`apply_page_result`](Self::apply_page_result).
pub struct FeedController {
    state: FeedState,
    index: FeedIndex,
    rating: Box<dyn RatingRenderer>,
    default_max_lines: u16,
    observers: Vec<Sender<FeedEvent>>,
}

impl FeedController {
    /// Create a controller with an empty index.
    pub fn new(page_size: usize, default_max_lines: u16, rating: Box<dyn RatingRenderer>) -> Self {
        Self {
            state: FeedState::new(page_size),
            index: FeedIndex::new(),
            rating,
            default_max_lines,
            observers: Vec::new(),
        }
    }

    /// Current pagination state.
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// Current descriptor index.
    pub fn index(&self) -> &FeedIndex {
        &self.index
    }

    /// Register an observer. Every state mutation emits one
    /// [`FeedEvent::StateChanged`] on each live channel; observers that
    /// dropped their receiver are pruned on the next notification.
    pub fn subscribe(&mut self) -> Receiver<FeedEvent> {
        let (tx, rx) = mpsc::channel();
        self.observers.push(tx);
        rx
    }

    /// Decide whether the next page should be fetched.
    ///
    /// Returns `None` while a fetch is outstanding or once the feed is
    /// exhausted; callers issue the returned request verbatim.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        match self.state.begin_fetch() {
            Some(request) => {
                debug!(offset = request.offset, limit = request.limit, "requesting page");
                Some(request)
            }
            None => {
                debug!(
                    is_loading = self.state.is_loading(),
                    has_more = self.state.has_more(),
                    "page request suppressed"
                );
                None
            }
        }
    }

    /// Apply the outcome of an issued fetch.
    ///
    /// On success every record in the page is merged in arrival order, the
    /// offset advances by one page, and the total becomes known. On failure
    /// nothing changes except the loading flag, so the next
    /// [`request_next_page`](Self::request_next_page) re-issues the
    /// identical request. Either way one notification is emitted.
    ///
    /// Returns the number of records merged.
    pub fn apply_page_result(
        &mut self,
        result: Result<ReviewsPage, FeedError>,
    ) -> Result<usize, FeedError> {
        match result {
            Ok(page) => {
                for record in &page.items {
                    self.index.append(record, self.rating.as_ref(), self.default_max_lines);
                }
                self.state.complete_fetch(page.count);
                debug!(
                    merged = page.items.len(),
                    offset = self.state.offset(),
                    total = page.count,
                    "page applied"
                );
                self.notify();
                Ok(page.items.len())
            }
            Err(error) => {
                self.state.fail_fetch();
                warn!(%error, "page fetch failed");
                self.notify();
                Err(error)
            }
        }
    }

    /// Lift the line limit on one entry. Unknown ids are ignored; late taps
    /// against discarded state must not fault.
    pub fn expand(&mut self, id: ReviewId) {
        match self.index.get_mut(id) {
            Some(descriptor) => {
                descriptor.expand();
                debug!(%id, "entry expanded");
                self.notify();
            }
            None => {
                debug!(%id, "expand for unknown id ignored");
            }
        }
    }

    /// Apply one command from an interaction source.
    ///
    /// `Refresh` maps to a page request decision; the caller issues the
    /// returned request if any.
    pub fn handle_command(&mut self, command: FeedCommand) -> Option<PageRequest> {
        match command {
            FeedCommand::Expand(id) => {
                self.expand(id);
                None
            }
            FeedCommand::Refresh => self.request_next_page(),
        }
    }

    fn notify(&mut self) {
        self.observers.retain(|tx| tx.send(FeedEvent::StateChanged).is_ok());
    }
}

impl std::fmt::Debug for FeedController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedController")
            .field("state", &self.state)
            .field("entries", &self.index.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}
