//! Feed index: ordered, id-addressable store of cell descriptors.

use crate::feed::descriptor::{CellDescriptor, FeedEntry, SummaryDescriptor};
use crate::model::{ReviewId, ReviewRecord};
use crate::rating::RatingRenderer;
use std::collections::HashMap;

/// Ordered descriptor store backing the visible list.
///
/// Descriptors are only ever appended or mutated in place, never removed,
/// and exactly one exists per record ever merged. An id → position map
/// makes mutation by id O(1) instead of a linear scan per toggle.
///
/// The summary is always the logical last entry and is regenerated on every
/// size change so its count cannot go stale.
#[derive(Debug)]
pub struct FeedIndex {
    descriptors: Vec<CellDescriptor>,
    positions: HashMap<ReviewId, usize>,
    summary: SummaryDescriptor,
    next_id: u64,
}

impl FeedIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
            positions: HashMap::new(),
            summary: SummaryDescriptor::new(0),
            next_id: 0,
        }
    }

    /// Merge one record: derive its descriptor, assign the next stable id,
    /// append, and regenerate the summary. Returns the assigned id.
    pub(crate) fn append(
        &mut self,
        record: &ReviewRecord,
        rating: &dyn RatingRenderer,
        max_lines: u16,
    ) -> ReviewId {
        let id = ReviewId::new(self.next_id);
        self.next_id += 1;
        let descriptor = CellDescriptor::from_record(id, record, rating, max_lines);
        self.positions.insert(id, self.descriptors.len());
        self.descriptors.push(descriptor);
        self.summary = SummaryDescriptor::new(self.descriptors.len());
        id
    }

    /// Descriptor by id.
    pub fn get(&self, id: ReviewId) -> Option<&CellDescriptor> {
        self.positions.get(&id).map(|&pos| &self.descriptors[pos])
    }

    /// Mutable descriptor by id. O(1) via the position map.
    pub(crate) fn get_mut(&mut self, id: ReviewId) -> Option<&mut CellDescriptor> {
        let pos = *self.positions.get(&id)?;
        Some(&mut self.descriptors[pos])
    }

    /// Position of `id` within the review entries, if present.
    pub fn position(&self, id: ReviewId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Number of review entries, excluding the summary.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no records have been merged yet.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Review descriptors in merge order.
    pub fn descriptors(&self) -> &[CellDescriptor] {
        &self.descriptors
    }

    /// The trailing summary entry.
    pub fn summary(&self) -> &SummaryDescriptor {
        &self.summary
    }

    /// Total number of rows including the summary.
    pub fn entry_count(&self) -> usize {
        self.descriptors.len() + 1
    }

    /// Row at `position`: review rows first, summary last.
    pub fn entry(&self, position: usize) -> Option<FeedEntry<'_>> {
        if position < self.descriptors.len() {
            Some(FeedEntry::Review(&self.descriptors[position]))
        } else if position == self.descriptors.len() {
            Some(FeedEntry::Summary(&self.summary))
        } else {
            None
        }
    }

    /// All rows in display order, summary last.
    pub fn entries(&self) -> impl Iterator<Item = FeedEntry<'_>> {
        self.descriptors
            .iter()
            .map(FeedEntry::Review)
            .chain(std::iter::once(FeedEntry::Summary(&self.summary)))
    }
}

impl Default for FeedIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::StarRatingRenderer;

    fn record(first: &str) -> ReviewRecord {
        ReviewRecord {
            first_name: first.to_string(),
            last_name: "L".to_string(),
            rating: 4,
            text: "text".to_string(),
            created: "today".to_string(),
            photos: None,
            avatar_url: "a".to_string(),
        }
    }

    fn index_with(names: &[&str]) -> FeedIndex {
        let mut index = FeedIndex::new();
        for name in names {
            index.append(&record(name), &StarRatingRenderer, 3);
        }
        index
    }

    #[test]
    fn empty_index_has_only_summary() {
        let index = FeedIndex::new();
        assert_eq!(index.len(), 0);
        assert_eq!(index.entry_count(), 1);
        assert_eq!(index.summary().count(), 0);
        assert!(matches!(index.entry(0), Some(FeedEntry::Summary(s)) if s.count() == 0));
    }

    #[test]
    fn append_assigns_monotonic_ids() {
        let mut index = FeedIndex::new();
        let a = index.append(&record("A"), &StarRatingRenderer, 3);
        let b = index.append(&record("B"), &StarRatingRenderer, 3);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn append_preserves_arrival_order() {
        let index = index_with(&["A", "B", "C"]);
        let names: Vec<&str> = index.descriptors().iter().map(|d| d.full_name()).collect();
        assert_eq!(names, ["A L", "B L", "C L"]);
    }

    #[test]
    fn summary_tracks_size() {
        let index = index_with(&["A", "B"]);
        assert_eq!(index.summary().count(), 2);
        assert_eq!(index.entry_count(), 3);
    }

    #[test]
    fn summary_is_always_last_entry() {
        let index = index_with(&["A", "B"]);
        assert!(matches!(index.entry(2), Some(FeedEntry::Summary(s)) if s.count() == 2));
        assert!(index.entry(3).is_none());
        let last = index.entries().last().expect("at least the summary");
        assert!(matches!(last, FeedEntry::Summary(_)));
    }

    #[test]
    fn get_by_id_finds_descriptor() {
        let mut index = FeedIndex::new();
        let id = index.append(&record("A"), &StarRatingRenderer, 3);
        index.append(&record("B"), &StarRatingRenderer, 3);
        assert_eq!(index.get(id).map(|d| d.full_name()), Some("A L"));
        assert_eq!(index.position(id), Some(0));
    }

    #[test]
    fn get_unknown_id_is_none() {
        let index = index_with(&["A"]);
        assert!(index.get(ReviewId::new(99)).is_none());
        assert!(index.position(ReviewId::new(99)).is_none());
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut index = FeedIndex::new();
        let id = index.append(&record("A"), &StarRatingRenderer, 3);
        index.get_mut(id).expect("present").expand();
        assert!(index.get(id).expect("present").is_expanded());
        // Position unchanged by mutation.
        assert_eq!(index.position(id), Some(0));
    }
}
