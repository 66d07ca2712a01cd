//! Image storage capability.
//!
//! The feed core never fetches or decodes bitmaps; it only carries reference
//! strings. Callers that do load images inject an [`ImageStore`] wherever
//! caching is wanted; there is deliberately no global shared cache. Image
//! failures stay on the caller's side and never propagate into feed state.

use std::collections::HashMap;

/// Injected image cache keyed by reference string.
pub trait ImageStore {
    /// Cached bytes for `reference`, if present.
    fn get(&self, reference: &str) -> Option<&[u8]>;

    /// Store bytes under `reference`, replacing any previous entry.
    fn put(&mut self, reference: &str, bytes: Vec<u8>);

    /// Drop the entry for `reference`, if present.
    fn remove(&mut self, reference: &str);
}

/// In-memory image store with no eviction policy.
///
/// Suitable for tests and short-lived sessions; production callers with
/// bounded memory wrap their own store.
#[derive(Debug, Default)]
pub struct MemoryImageStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryImageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached images.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no images.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ImageStore for MemoryImageStore {
    fn get(&self, reference: &str) -> Option<&[u8]> {
        self.entries.get(reference).map(Vec::as_slice)
    }

    fn put(&mut self, reference: &str, bytes: Vec<u8>) {
        self.entries.insert(reference.to_string(), bytes);
    }

    fn remove(&mut self, reference: &str) {
        self.entries.remove(reference);
    }
}
