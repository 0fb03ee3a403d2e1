//! Storage trait and error types.
//!
//! Provides the core [`Storage`] trait for document discovery and retrieval,
//! along with [`StorageError`] for unified error handling across backends.
//!
//! # Slug Convention
//!
//! All document parameters are **slugs**, not file paths:
//! - `"hello"` - a document at the store root
//! - `"posts/2024/launch"` - a nested document
//!
//! Slugs never contain the store root and never carry the file extension.
//! Storage implementations handle the mapping from slugs to their internal
//! storage format.

use std::path::{Path, PathBuf};

/// Semantic error categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// Resource does not exist.
    NotFound,
    /// Permission denied.
    PermissionDenied,
    /// Slug cannot name a document in this store.
    InvalidPath,
    /// Other/unknown error category.
    Other,
}

/// Storage error with semantic kind and backend-specific source.
#[derive(Debug)]
pub struct StorageError {
    kind: StorageErrorKind,
    path: Option<PathBuf>,
    backend: Option<&'static str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    /// Create a new storage error.
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            path: None,
            backend: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach backend identifier.
    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Semantic error category.
    pub fn kind(&self) -> StorageErrorKind {
        self.kind
    }

    /// Path context, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Backend identifier (e.g., "Fs", "Mock").
    pub fn backend(&self) -> Option<&'static str> {
        self.backend
    }

    /// Create a not found error with path.
    #[must_use]
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_path(path)
    }

    /// Create a storage error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: Option<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => StorageErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => StorageErrorKind::PermissionDenied,
            _ => StorageErrorKind::Other,
        };
        let mut error = Self::new(kind).with_source(err);
        if let Some(p) = path {
            error = error.with_path(p);
        }
        error
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "[Backend] Kind: message (path: /foo/bar)"
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }

        let kind_str = match self.kind {
            StorageErrorKind::NotFound => "Not found",
            StorageErrorKind::PermissionDenied => "Permission denied",
            StorageErrorKind::InvalidPath => "Invalid path",
            StorageErrorKind::Other => "Error",
        };

        write!(f, "{kind_str}")?;

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Storage abstraction for document discovery and retrieval.
///
/// The store is read-only from the caller's perspective. Implementations must
/// be shareable across threads.
pub trait Storage: Send + Sync {
    /// Discover every document and return its slug.
    ///
    /// Every call performs a full walk; nothing is remembered between calls.
    /// The order is the backend's traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store (or any part of it) cannot be
    /// listed.
    fn scan(&self) -> Result<Vec<String>, StorageError>;

    /// Read the full source text of a document.
    ///
    /// # Arguments
    ///
    /// * `slug` - Document slug (e.g., "hello", "posts/launch")
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] with [`StorageErrorKind::NotFound`] if no
    /// document has this slug, or another kind if it can't be read.
    fn read(&self, slug: &str) -> Result<String, StorageError>;
}
