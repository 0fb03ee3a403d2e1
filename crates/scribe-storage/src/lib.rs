//! Document store abstraction for scribe.
//!
//! This crate provides a [`Storage`] trait that hides where markdown documents
//! live. Documents are addressed by slug: their path relative to the store
//! root, with `/` separators and without the file extension.
//!
//! - [`Storage`] trait with `scan()` and `read()` methods
//! - [`StorageError`] with a semantic [`StorageErrorKind`]
//! - [`MockStorage`] for testing (behind `mock` feature flag)
//!
//! The filesystem backend lives in `scribe-storage-fs`.

#[cfg(feature = "mock")]
mod mock;
mod storage;

#[cfg(feature = "mock")]
pub use mock::MockStorage;
pub use storage::{Storage, StorageError, StorageErrorKind};
