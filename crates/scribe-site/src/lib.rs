//! Slug discovery and cached document rendering for scribe.
//!
//! This crate provides:
//! - [`Site`]: the two operations callers use, `render_content` and `list_slugs`
//! - [`ContentCache`]: process-lifetime memoization of rendered markup
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use std::sync::Arc;
//! use scribe_site::Site;
//! use scribe_storage_fs::FsStorage;
//!
//! let storage = Arc::new(FsStorage::new(PathBuf::from("content")));
//! let site = Site::new(storage);
//!
//! for slug in site.list_slugs()? {
//!     let html = site.render_content(&slug)?;
//!     println!("{slug}: {} bytes", html.len());
//! }
//! # Ok(())
//! # }
//! ```

mod content_cache;
mod site;

pub use content_cache::ContentCache;
pub use site::{ContentError, Site};
