//! End-to-end tests of `Site` over a real content directory.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use scribe_site::{ContentError, Site};
use scribe_storage_fs::FsStorage;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn create_site(root: &Path) -> Site {
    Site::new(Arc::new(FsStorage::new(root.to_path_buf())))
}

#[test]
fn test_discovery_over_mixed_tree() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    write(&root, "about.md", "# About");
    write(&root, "posts/2024/launch.md", "# Launch");
    write(&root, "posts/2024/cover.png", "png");
    write(&root, "posts/draft.txt", "draft");
    write(&root, "posts/hello.md", "Hello");
    write(&root, "notes.markdown", "not markdown for us");

    let site = create_site(&root);

    assert_eq!(
        site.list_slugs().unwrap(),
        vec!["posts/2024/launch", "posts/hello", "about"]
    );
}

#[test]
fn test_every_discovered_slug_renders() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    write(&root, "a.md", "# A");
    write(&root, "nested/b.md", "- b");

    let site = create_site(&root);

    for slug in site.list_slugs().unwrap() {
        site.render_content(&slug).unwrap();
    }
    assert_eq!(site.cache().len(), 2);
}

#[test]
fn test_render_then_cache_ignores_file_edits() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    write(&root, "posts/hello.md", "# Hello\n\n**world**\n");

    let site = create_site(&root);
    let first = site.render_content("posts/hello").unwrap();

    write(&root, "posts/hello.md", "# Changed");
    let second = site.render_content("posts/hello").unwrap();

    assert_eq!(&*first, "<h1>Hello</h1><br><strong>world</strong><br>");
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_cache_hit_survives_file_removal() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    write(&root, "gone.md", "bye");

    let site = create_site(&root);
    site.render_content("gone").unwrap();
    fs::remove_file(root.join("gone.md")).unwrap();

    assert_eq!(&*site.render_content("gone").unwrap(), "bye<br>");
}

#[test]
fn test_missing_slug_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    fs::create_dir_all(&root).unwrap();

    let site = create_site(&root);

    let err = site.render_content("nope").unwrap_err();
    assert!(matches!(err, ContentError::NotFound(ref slug) if slug == "nope"));
    assert!(site.cache().is_empty());

    write(&root, "nope.md", "now here");
    assert_eq!(&*site.render_content("nope").unwrap(), "now here<br>");
}

#[test]
fn test_traversal_slug_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    write(dir.path(), "secret.md", "secret");
    fs::create_dir_all(&root).unwrap();

    let site = create_site(&root);

    assert!(site.render_content("../secret").unwrap_err().is_not_found());
}

#[test]
fn test_non_utf8_document_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("cafe.md"), b"# Caf\xe9\n").unwrap();

    let site = create_site(&root);

    assert_eq!(
        &*site.render_content("cafe").unwrap(),
        "<h1>Caf\u{fffd}</h1>"
    );
}

#[test]
fn test_unreadable_document_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("content");
    fs::create_dir_all(root.join("folder.md")).unwrap();

    let site = create_site(&root);

    let err = site.render_content("folder").unwrap_err();
    assert!(matches!(err, ContentError::Io(_)));
    assert!(!site.cache().contains("folder"));
}

#[test]
fn test_missing_root_fails_discovery() {
    let dir = tempfile::tempdir().unwrap();

    let site = create_site(&dir.path().join("content"));

    assert!(matches!(site.list_slugs(), Err(ContentError::Io(_))));
}
