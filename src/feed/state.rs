//! Pagination bookkeeping.

/// One bounded batch request: fetch records `[offset, offset + limit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first record to fetch.
    pub offset: usize,
    /// Maximum number of records in the page.
    pub limit: usize,
}

/// Pagination state for one feed session.
///
/// # Invariants
/// - `offset` only increases, in increments of `page_size`, and never
///   exceeds `total_available` once that is known.
/// - `is_loading` is true for the entire span between issuing a fetch and
///   applying its result or failure; it is the sole mechanism preventing
///   concurrent duplicate fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedState {
    offset: usize,
    page_size: usize,
    total_available: Option<usize>,
    is_loading: bool,
}

impl FeedState {
    /// Fresh state before any fetch. `page_size` is clamped to at least 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            offset: 0,
            page_size: page_size.max(1),
            total_available: None,
            is_loading: false,
        }
    }

    /// Index of the first not-yet-fetched record.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Records requested per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total records at the source, unknown before the first success.
    pub fn total_available(&self) -> Option<usize> {
        self.total_available
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the source may still hold unfetched records. True before the
    /// first successful page, when the total is unknown.
    pub fn has_more(&self) -> bool {
        match self.total_available {
            Some(total) => self.offset < total,
            None => true,
        }
    }

    /// The next page request, gated by the loading flag and exhaustion.
    /// Marks the state loading when a request is produced.
    pub(crate) fn begin_fetch(&mut self) -> Option<PageRequest> {
        if self.is_loading || !self.has_more() {
            return None;
        }
        self.is_loading = true;
        Some(PageRequest {
            offset: self.offset,
            limit: self.page_size,
        })
    }

    /// Record a successful page: advance by one page, learn the total.
    /// The offset is capped at the total so it can never overshoot it.
    pub(crate) fn complete_fetch(&mut self, total_available: usize) {
        self.offset = (self.offset + self.page_size).min(total_available);
        self.total_available = Some(total_available);
        self.is_loading = false;
    }

    /// Record a failed page: clear the loading flag, change nothing else,
    /// so a retry re-issues the identical request.
    pub(crate) fn fail_fetch(&mut self) {
        self.is_loading = false;
    }
}
