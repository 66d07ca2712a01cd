//! Cell descriptors: derived, display-ready state for one feed row.

use crate::model::{ReviewId, ReviewRecord};
use crate::rating::{RatingGlyph, RatingRenderer};
use chrono::DateTime;

/// Derived display state for one review.
///
/// Created exactly once when its record is merged and kept for the lifetime
/// of the feed session. `max_lines` is the only mutable field; everything
/// else is frozen at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDescriptor {
    id: ReviewId,
    display_text: String,
    created_label: String,
    full_name: String,
    rating_glyph: RatingGlyph,
    avatar_ref: String,
    photo_refs: Vec<String>,
    max_lines: u16,
}

impl CellDescriptor {
    /// Derive a descriptor from a record. Called by the index during merge.
    pub(crate) fn from_record(
        id: ReviewId,
        record: &ReviewRecord,
        rating: &dyn RatingRenderer,
        max_lines: u16,
    ) -> Self {
        Self {
            id,
            display_text: record.text.clone(),
            created_label: created_label(&record.created),
            full_name: record.full_name(),
            rating_glyph: rating.render(record.rating),
            avatar_ref: record.avatar_url.clone(),
            photo_refs: record.photo_refs().to_vec(),
            max_lines,
        }
    }

    /// Stable identifier, assigned once at creation.
    pub fn id(&self) -> ReviewId {
        self.id
    }

    /// Review body text.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    /// Human-readable creation label.
    pub fn created_label(&self) -> &str {
        &self.created_label
    }

    /// Reviewer's full display name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Opaque rendered rating handle.
    pub fn rating_glyph(&self) -> &RatingGlyph {
        &self.rating_glyph
    }

    /// Avatar image reference.
    pub fn avatar_ref(&self) -> &str {
        &self.avatar_ref
    }

    /// Photo references in display order.
    pub fn photo_refs(&self) -> &[String] {
        &self.photo_refs
    }

    /// Line limit for the text block; 0 means unlimited (expanded).
    pub fn max_lines(&self) -> u16 {
        self.max_lines
    }

    /// Whether this descriptor is in the expanded terminal state.
    pub fn is_expanded(&self) -> bool {
        self.max_lines == 0
    }

    /// Lift the line limit. One-way per session; there is no re-collapse.
    pub(crate) fn expand(&mut self) {
        self.max_lines = 0;
    }

    /// Construct a descriptor directly, bypassing record derivation.
    #[cfg(test)]
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn for_tests(
        id: ReviewId,
        display_text: &str,
        created_label: &str,
        full_name: &str,
        rating_glyph: RatingGlyph,
        avatar_ref: &str,
        photo_refs: Vec<String>,
        max_lines: u16,
    ) -> Self {
        Self {
            id,
            display_text: display_text.to_string(),
            created_label: created_label.to_string(),
            full_name: full_name.to_string(),
            rating_glyph,
            avatar_ref: avatar_ref.to_string(),
            photo_refs,
            max_lines,
        }
    }
}

/// Derive the display label for a creation time.
///
/// RFC 3339 timestamps become a plain date ("25 February 2025"); anything
/// the source already formatted passes through untouched.
fn created_label(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%-d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Synthetic trailing entry carrying the current total item count.
///
/// Regenerated (never mutated) whenever the index changes size, so a
/// stale count cannot survive a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryDescriptor {
    count: usize,
}

impl SummaryDescriptor {
    /// Create a summary for the given item count.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Number of review entries currently in the feed.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Display label for the summary row.
    pub fn label(&self) -> String {
        format!("{} reviews", self.count)
    }
}

/// One row of the feed, dispatched by the rendering collaborator.
///
/// Tagged variant instead of dynamic type checks: a renderer matches on the
/// kind and never downcasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedEntry<'a> {
    /// A review row.
    Review(&'a CellDescriptor),
    /// The trailing summary row with the total count.
    Summary(&'a SummaryDescriptor),
}
