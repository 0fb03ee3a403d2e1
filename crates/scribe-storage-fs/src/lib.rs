//! Filesystem storage implementation for scribe.
//!
//! This crate provides [`FsStorage`], a filesystem-based implementation of the
//! [`Storage`](scribe_storage::Storage) trait. Documents live under a single
//! root directory, one file per document, in arbitrarily nested
//! subdirectories. A document's slug is its path relative to the root with the
//! extension removed:
//!
//! - `content/hello.md` -> `"hello"`
//! - `content/posts/2024/launch.md` -> `"posts/2024/launch"`
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use scribe_storage::Storage;
//! use scribe_storage_fs::FsStorage;
//!
//! let storage = FsStorage::new(PathBuf::from("content"));
//! for slug in storage.scan()? {
//!     println!("{slug}");
//! }
//! ```

mod scanner;

use std::fs;
use std::path::{Component, Path, PathBuf};

use scribe_storage::{Storage, StorageError, StorageErrorKind};

use scanner::Scanner;

/// Backend identifier for error messages.
pub(crate) const BACKEND: &str = "Fs";

/// Default markdown file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Filesystem storage implementation.
///
/// Every [`scan`](Storage::scan) walks the whole tree again; every
/// [`read`](Storage::read) opens the file again. Callers that want caching
/// layer it on top.
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Root directory for document storage.
    source_dir: PathBuf,
    /// Document file extension, without the leading dot.
    extension: String,
}

impl FsStorage {
    /// Create a new filesystem storage reading `.md` files.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory containing markdown files
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self::with_extension(source_dir, DEFAULT_EXTENSION)
    }

    /// Create a new filesystem storage with a custom document extension.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory containing documents
    /// * `extension` - File extension without the dot (e.g., `"md"`)
    #[must_use]
    pub fn with_extension(source_dir: PathBuf, extension: impl Into<String>) -> Self {
        Self {
            source_dir,
            extension: extension.into(),
        }
    }

    /// Validate that a slug names a file inside the source directory.
    ///
    /// Rejects empty slugs, absolute paths and parent directory components
    /// (`..`), so a slug can never escape the root.
    fn validate_slug(slug: &str) -> Result<(), StorageError> {
        let escapes = Path::new(slug).components().any(|c| {
            matches!(
                c,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });

        if slug.is_empty() || escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_path(slug)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Resolve a slug to its file path.
    fn document_path(&self, slug: &str) -> Result<PathBuf, StorageError> {
        Self::validate_slug(slug)?;
        Ok(self.source_dir.join(format!("{slug}.{}", self.extension)))
    }
}

impl Storage for FsStorage {
    fn scan(&self) -> Result<Vec<String>, StorageError> {
        let slugs = Scanner::new(&self.source_dir, &self.extension).scan()?;
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            count = slugs.len(),
            "Scanned documents"
        );
        Ok(slugs)
    }

    fn read(&self, slug: &str) -> Result<String, StorageError> {
        let full_path = self.document_path(slug)?;
        let bytes = fs::read(&full_path)
            .map_err(|e| StorageError::io(e, Some(full_path.clone())).with_backend(BACKEND))?;
        // Invalid UTF-8 sequences become U+FFFD rather than failing the read.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
