//! Document discovery and cached rendering over a [`Storage`] backend.
//!
//! [`Site`] is what the routing layer talks to. It exposes exactly two
//! operations:
//! - [`Site::render_content`]: slug to rendered markup, memoized for the
//!   lifetime of the `Site`
//! - [`Site::list_slugs`]: a fresh walk of the store on every call
//!
//! # Thread Safety
//!
//! `Site` is `Send + Sync` and meant to be shared behind an `Arc`. The content
//! cache serializes renders; discovery takes no locks.

use std::sync::Arc;

use scribe_renderer::render_document;
use scribe_storage::{Storage, StorageError, StorageErrorKind};

use crate::content_cache::ContentCache;

/// Error returned by [`Site`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// No document exists for the requested slug.
    #[error("Document not found: {0}")]
    NotFound(String),
    /// The store could not be read or listed.
    #[error("I/O error: {0}")]
    Io(#[source] StorageError),
}

impl ContentError {
    /// Classify a storage error raised while reading `slug`.
    ///
    /// A slug the store rejects as invalid can never name a document, so it is
    /// reported as not found.
    fn from_read(slug: &str, err: StorageError) -> Self {
        match err.kind() {
            StorageErrorKind::NotFound | StorageErrorKind::InvalidPath => {
                Self::NotFound(slug.to_owned())
            }
            _ => Self::Io(err),
        }
    }

    /// Whether this error means the slug has no document.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Cached document rendering and slug discovery.
pub struct Site {
    storage: Arc<dyn Storage>,
    cache: ContentCache,
}

impl Site {
    /// Create a new site over `storage` with an empty content cache.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            cache: ContentCache::new(),
        }
    }

    /// Render the document for `slug`.
    ///
    /// The first successful call reads and renders the document and caches
    /// the result; later calls return the cached markup without touching the
    /// store. Failures are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] if there is no such document and
    /// [`ContentError::Io`] if it can't be read.
    pub fn render_content(&self, slug: &str) -> Result<Arc<str>, ContentError> {
        self.cache.get_or_render(slug, || {
            let source = self
                .storage
                .read(slug)
                .map_err(|e| ContentError::from_read(slug, e))?;
            let html = render_document(&source);
            tracing::debug!(slug = %slug, bytes = html.len(), "Rendered document");
            Ok(html)
        })
    }

    /// List every document slug in store traversal order.
    ///
    /// Performs a full walk on every call; the result is not cached.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if the store can't be listed.
    pub fn list_slugs(&self) -> Result<Vec<String>, ContentError> {
        self.storage.scan().map_err(|e| {
            tracing::warn!(error = %e, "Failed to scan storage");
            ContentError::Io(e)
        })
    }

    /// The content cache backing [`render_content`](Self::render_content).
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }
}
