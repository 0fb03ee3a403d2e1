//! Slug discovery by filesystem walking.
//!
//! Each directory level returns its own freshly built list of slugs, which the
//! caller splices in place. No state is shared between levels or between runs.

use std::fs;
use std::path::{Path, PathBuf};

use scribe_storage::StorageError;

use crate::BACKEND;

/// Walks a document root and derives slugs from markdown file names.
pub(crate) struct Scanner<'a> {
    source_dir: &'a Path,
    /// File name suffix including the leading dot (e.g., ".md").
    suffix: String,
}

impl<'a> Scanner<'a> {
    /// Create a scanner for files ending in `.{extension}` under `source_dir`.
    pub fn new(source_dir: &'a Path, extension: &str) -> Self {
        Self {
            source_dir,
            suffix: format!(".{extension}"),
        }
    }

    /// Walk the whole tree and return every slug.
    ///
    /// At each level, slugs from subdirectories come first, followed by the
    /// level's own documents. Both groups are in file name order, so the result
    /// is stable regardless of the order the OS lists entries in.
    pub fn scan(&self) -> Result<Vec<String>, StorageError> {
        self.scan_directory(self.source_dir, "")
    }

    fn scan_directory(&self, dir: &Path, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut entries = list_entries(dir)?;
        entries.sort_by(|(a, _, _), (b, _, _)| a.cmp(b));

        let mut slugs = Vec::new();
        let mut files = Vec::new();
        for (name, path, is_dir) in entries {
            let Some(name) = name.to_str() else {
                tracing::warn!(path = %path.display(), "Skipping non UTF-8 file name");
                continue;
            };

            if is_dir {
                slugs.extend(self.scan_directory(&path, &join_slug(prefix, name))?);
            } else if let Some(stem) = name.strip_suffix(self.suffix.as_str())
                && !stem.is_empty()
            {
                files.push(join_slug(prefix, stem));
            }
        }

        // Nested slugs precede the files of the directory they live in.
        slugs.append(&mut files);
        Ok(slugs)
    }
}

/// List a directory as `(name, path, is_dir)` triples.
///
/// Symlinks are not followed when deciding whether an entry is a directory.
fn list_entries(dir: &Path) -> Result<Vec<(std::ffi::OsString, PathBuf, bool)>, StorageError> {
    let io_err =
        |e: std::io::Error| StorageError::io(e, Some(dir.to_path_buf())).with_backend(BACKEND);

    fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| {
            let entry = entry.map_err(io_err)?;
            let is_dir = entry.file_type().map_err(io_err)?.is_dir();
            Ok((entry.file_name(), entry.path(), is_dir))
        })
        .collect()
}

/// Append a path segment to a slug prefix using `/` as separator.
fn join_slug(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
