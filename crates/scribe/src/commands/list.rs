//! `scribe list` command implementation.

use clap::Args;

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl ListArgs {
    /// Execute the list command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the content root can't be listed.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.source.open_site()?;

        let slugs = site.list_slugs()?;
        if slugs.is_empty() {
            output.note("No documents found");
        }
        for slug in &slugs {
            output.line(slug)?;
        }

        Ok(())
    }
}
