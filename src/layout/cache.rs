//! LRU memo for layout results.
//!
//! `compute_layout` is pure, so memoizing per `(id, width, max_lines)` is
//! safe. Truncation state is part of the key, which makes invalidation on
//! expand automatic: the mutated descriptor simply misses and recomputes,
//! and the stale entry ages out.

use crate::feed::CellDescriptor;
use crate::layout::calculator::{compute_layout, LayoutResult};
use crate::layout::metrics::LayoutMetrics;
use crate::layout::text::TextMeasurer;
use crate::model::ReviewId;
use lru::LruCache;
use std::num::NonZeroUsize;

const DEFAULT_CAPACITY: usize = 1000;

/// Key for layout cache lookup.
///
/// Includes every descriptor-side input that affects geometry. Width is
/// stored bit-exact so distinct f32 values never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct LayoutCacheKey {
    id: ReviewId,
    width_bits: u32,
    max_lines: u16,
}

/// Bounded LRU cache over [`compute_layout`].
pub struct LayoutCache {
    cache: LruCache<LayoutCacheKey, LayoutResult>,
}

impl LayoutCache {
    /// Create a cache with the given capacity. Zero falls back to the
    /// default of 1000 entries.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or(NonZeroUsize::new(DEFAULT_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Layout for `descriptor` at `container_width`, served from the cache
    /// when possible.
    pub fn get_or_compute(
        &mut self,
        descriptor: &CellDescriptor,
        container_width: f32,
        metrics: &LayoutMetrics,
        measurer: &dyn TextMeasurer,
    ) -> LayoutResult {
        let key = LayoutCacheKey {
            id: descriptor.id(),
            width_bits: container_width.to_bits(),
            max_lines: descriptor.max_lines(),
        };
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        let result = compute_layout(descriptor, container_width, metrics, measurer);
        self.cache.put(key, result.clone());
        result
    }

    /// Drop all cached results.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text::MonoMeasurer;
    use crate::rating::{RatingRenderer, StarRatingRenderer};

    fn descriptor(id: u64, max_lines: u16) -> CellDescriptor {
        CellDescriptor::for_tests(
            ReviewId::new(id),
            "some review body text",
            "25 February 2025",
            "Ada Lovelace",
            StarRatingRenderer.render(4),
            "avatar-1",
            vec![],
            max_lines,
        )
    }

    /// Descriptor whose text wraps well past any small line bound.
    fn long_descriptor(id: u64, max_lines: u16) -> CellDescriptor {
        CellDescriptor::for_tests(
            ReviewId::new(id),
            &"word ".repeat(100),
            "25 February 2025",
            "Ada Lovelace",
            StarRatingRenderer.render(4),
            "avatar-1",
            vec![],
            max_lines,
        )
    }

    fn measurer() -> MonoMeasurer {
        MonoMeasurer::new(10.0, 20.0)
    }

    #[test]
    fn cache_hit_matches_direct_computation() {
        let mut cache = LayoutCache::new(10);
        let d = descriptor(1, 3);
        let m = LayoutMetrics::default();
        let first = cache.get_or_compute(&d, 320.0, &m, &measurer());
        let second = cache.get_or_compute(&d, 320.0, &m, &measurer());
        assert_eq!(first, second);
        assert_eq!(first, compute_layout(&d, 320.0, &m, &measurer()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_widths_occupy_distinct_slots() {
        let mut cache = LayoutCache::new(10);
        let d = descriptor(1, 3);
        let m = LayoutMetrics::default();
        cache.get_or_compute(&d, 320.0, &m, &measurer());
        cache.get_or_compute(&d, 375.0, &m, &measurer());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn expand_changes_key_so_stale_entry_is_bypassed() {
        let mut cache = LayoutCache::new(10);
        let m = LayoutMetrics::default();
        let collapsed = long_descriptor(1, 3);
        let before = cache.get_or_compute(&collapsed, 320.0, &m, &measurer());
        // Truncated: the collapsed entry renders at the 3-line bound.
        assert_eq!(before.text_frame.size.height, 3.0 * 20.0);

        let expanded = long_descriptor(1, 0);
        let after = cache.get_or_compute(&expanded, 320.0, &m, &measurer());
        assert!(after.text_frame.size.height > before.text_frame.size.height);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn capacity_bounds_entries_with_lru_eviction() {
        let mut cache = LayoutCache::new(2);
        let m = LayoutMetrics::default();
        for id in 0..5 {
            cache.get_or_compute(&descriptor(id, 3), 320.0, &m, &measurer());
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let cache = LayoutCache::new(0);
        assert!(cache.is_empty());
        // Can hold more than zero entries.
        let mut cache = cache;
        let m = LayoutMetrics::default();
        cache.get_or_compute(&descriptor(1, 3), 320.0, &m, &measurer());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut cache = LayoutCache::new(10);
        let m = LayoutMetrics::default();
        cache.get_or_compute(&descriptor(1, 3), 320.0, &m, &measurer());
        cache.clear();
        assert!(cache.is_empty());
    }
}
