//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{Storage, StorageError, StorageErrorKind};

const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores documents in memory and counts every `read` per slug, so tests can
/// prove that a cached lookup never touched the store. Use the builder methods
/// to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use scribe_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new().with_document("guide", "# User Guide");
///
/// let content = storage.read("guide").unwrap();
/// assert_eq!(storage.read_count("guide"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    slugs: RwLock<Vec<String>>,
    contents: RwLock<HashMap<String, String>>,
    read_failures: RwLock<HashMap<String, StorageErrorKind>>,
    scan_failure: RwLock<Option<StorageErrorKind>>,
    read_counts: RwLock<HashMap<String, usize>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document. Slugs are scanned in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, slug: impl Into<String>, content: impl Into<String>) -> Self {
        self.set_content(slug, content);
        self
    }

    /// Make every `read` of `slug` fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_read_failure(self, slug: impl Into<String>, kind: StorageErrorKind) -> Self {
        self.read_failures.write().unwrap().insert(slug.into(), kind);
        self
    }

    /// Make every `scan` fail with `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_scan_failure(self, kind: StorageErrorKind) -> Self {
        *self.scan_failure.write().unwrap() = Some(kind);
        self
    }

    /// Insert or replace a document's content after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_content(&self, slug: impl Into<String>, content: impl Into<String>) {
        let slug = slug.into();
        let previous = self
            .contents
            .write()
            .unwrap()
            .insert(slug.clone(), content.into());
        if previous.is_none() {
            self.slugs.write().unwrap().push(slug);
        }
    }

    /// Number of `read` calls made for `slug`, successful or not.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn read_count(&self, slug: &str) -> usize {
        self.read_counts
            .read()
            .unwrap()
            .get(slug)
            .copied()
            .unwrap_or(0)
    }

    /// Number of `read` calls made across all slugs.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn total_reads(&self) -> usize {
        self.read_counts.read().unwrap().values().sum()
    }
}

impl Storage for MockStorage {
    fn scan(&self) -> Result<Vec<String>, StorageError> {
        if let Some(kind) = *self.scan_failure.read().unwrap() {
            return Err(StorageError::new(kind).with_backend(BACKEND));
        }
        Ok(self.slugs.read().unwrap().clone())
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        *self
            .read_counts
            .write()
            .unwrap()
            .entry(slug.to_owned())
            .or_default() += 1;

        if let Some(kind) = self.read_failures.read().unwrap().get(slug) {
            return Err(StorageError::new(*kind)
                .with_path(slug)
                .with_backend(BACKEND));
        }

        self.contents
            .read()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or_else(|| StorageError::not_found(slug).with_backend(BACKEND))
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_mock_storage_is_send_sync() {
        assert_send_sync::<MockStorage>();
    }

    #[test]
    fn test_new_empty() {
        let storage = MockStorage::new();

        assert!(storage.scan().unwrap().is_empty());
        assert_eq!(storage.total_reads(), 0);
    }

    #[test]
    fn test_scan_keeps_insertion_order() {
        let storage = MockStorage::new()
            .with_document("zeta", "z")
            .with_document("posts/alpha", "a")
            .with_document("beta", "b");

        assert_eq!(storage.scan().unwrap(), vec!["zeta", "posts/alpha", "beta"]);
    }

    #[test]
    fn test_read_counts_per_slug() {
        let storage = MockStorage::new()
            .with_document("guide", "# Guide")
            .with_document("api", "# API");

        assert_eq!(storage.read("guide").unwrap(), "# Guide");
        assert_eq!(storage.read("guide").unwrap(), "# Guide");
        assert_eq!(storage.read("api").unwrap(), "# API");

        assert_eq!(storage.read_count("guide"), 2);
        assert_eq!(storage.read_count("api"), 1);
        assert_eq!(storage.read_count("other"), 0);
        assert_eq!(storage.total_reads(), 3);
    }

    #[test]
    fn test_read_missing_is_counted() {
        let storage = MockStorage::new();

        let err = storage.read("missing").unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::NotFound);
        assert_eq!(err.backend(), Some("Mock"));
        assert_eq!(err.path(), Some(Path::new("missing")));
        assert_eq!(storage.read_count("missing"), 1);
    }

    #[test]
    fn test_read_failure() {
        let storage = MockStorage::new()
            .with_document("broken", "text")
            .with_read_failure("broken", StorageErrorKind::Other);

        let err = storage.read("broken").unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::Other);
        assert_eq!(storage.read_count("broken"), 1);
    }

    #[test]
    fn test_scan_failure() {
        let storage = MockStorage::new()
            .with_document("a", "a")
            .with_scan_failure(StorageErrorKind::PermissionDenied);

        let err = storage.scan().unwrap_err();

        assert_eq!(err.kind(), StorageErrorKind::PermissionDenied);
    }

    #[test]
    fn test_set_content_replaces_without_duplicating_slug() {
        let storage = MockStorage::new().with_document("a", "old");

        storage.set_content("a", "new");

        assert_eq!(storage.read("a").unwrap(), "new");
        assert_eq!(storage.scan().unwrap(), vec!["a"]);
    }
}
