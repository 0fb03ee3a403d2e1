//! CLI error types.

use scribe_config::ConfigError;
use scribe_site::ContentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
