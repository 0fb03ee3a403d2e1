//! In-memory cache of rendered markup keyed by slug.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Process-lifetime cache of rendered documents.
///
/// Entries are added on the first successful render of a slug and are never
/// evicted or invalidated. Edits to a document after it was cached are not
/// picked up.
///
/// Lookup, render and insert happen under one lock, so two concurrent misses
/// for the same slug render it only once.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: Mutex<HashMap<String, Arc<str>>>,
}

impl ContentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached markup for `slug`, rendering it on a miss.
    ///
    /// `render` is only called on a miss. If it fails the error is returned
    /// and nothing is stored, so the next call tries again.
    pub fn get_or_render<E>(
        &self,
        slug: &str,
        render: impl FnOnce() -> Result<String, E>,
    ) -> Result<Arc<str>, E> {
        let mut entries = self.lock();

        if let Some(html) = entries.get(slug) {
            tracing::debug!(slug = %slug, "Content cache hit");
            return Ok(Arc::clone(html));
        }

        tracing::debug!(slug = %slug, "Content cache miss");
        let html: Arc<str> = render()?.into();
        entries.insert(slug.to_owned(), Arc::clone(&html));
        Ok(html)
    }

    /// Whether `slug` has a cached entry.
    pub fn contains(&self, slug: &str) -> bool {
        self.lock().contains_key(slug)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Entries are only inserted after a render completes, so a panic inside
    /// `render` leaves the map consistent and the poison can be ignored.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<str>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
