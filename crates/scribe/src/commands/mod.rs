//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use scribe_config::{CliSettings, Config};
use scribe_site::Site;
use scribe_storage_fs::FsStorage;

use crate::error::CliError;

pub(crate) use list::ListArgs;
pub(crate) use render::RenderArgs;

/// Arguments shared by every command that reads the content root.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover scribe.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content root directory (overrides config).
    #[arg(short, long, env = "SCRIBE_SOURCE_DIR")]
    source_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load configuration and build a [`Site`] over the configured root.
    pub(crate) fn open_site(self) -> Result<Site, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let docs = config.docs_resolved;

        tracing::info!(
            source_dir = %docs.source_dir.display(),
            extension = %docs.extension,
            "Opening content root"
        );

        let storage = FsStorage::with_extension(docs.source_dir, docs.extension);
        Ok(Site::new(Arc::new(storage)))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_site_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("scribe.toml");
        fs::write(&config_path, "[docs]\nsource_dir = \"posts\"\n").unwrap();
        fs::create_dir_all(dir.path().join("posts/2024")).unwrap();
        fs::write(dir.path().join("posts/2024/hello.md"), "# Hello").unwrap();

        let args = SourceArgs {
            config: Some(config_path),
            source_dir: None,
            verbose: false,
        };
        let site = args.open_site().unwrap();

        assert_eq!(site.list_slugs().unwrap(), vec!["2024/hello"]);
        assert_eq!(&*site.render_content("2024/hello").unwrap(), "<h1>Hello</h1>");
    }

    #[test]
    fn test_open_site_source_dir_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("scribe.toml");
        fs::write(&config_path, "[docs]\nsource_dir = \"posts\"\nextension = \"txt\"\n").unwrap();
        let other = dir.path().join("other");
        fs::create_dir_all(&other).unwrap();
        fs::write(other.join("note.txt"), "plain").unwrap();

        let args = SourceArgs {
            config: Some(config_path),
            source_dir: Some(other),
            verbose: false,
        };
        let site = args.open_site().unwrap();

        assert_eq!(site.list_slugs().unwrap(), vec!["note"]);
    }

    #[test]
    fn test_open_site_missing_config_is_error() {
        let dir = tempfile::tempdir().unwrap();

        let args = SourceArgs {
            config: Some(dir.path().join("missing.toml")),
            source_dir: None,
            verbose: false,
        };

        assert!(matches!(args.open_site(), Err(CliError::Config(_))));
    }
}
