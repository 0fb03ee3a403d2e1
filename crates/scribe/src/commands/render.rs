//! `scribe render` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Document slug (path under the content root, without extension).
    slug: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the document can't be rendered.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.source.open_site()?;

        let html = site.render_content(&self.slug)?;
        output.line(&html)?;

        Ok(())
    }
}
