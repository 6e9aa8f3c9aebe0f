//! `lander sections` command implementation.

use clap::Args;
use lander_content::{ContentClient, ContentSource};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sections command.
#[derive(Args)]
pub(crate) struct SectionsArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

impl SectionsArgs {
    /// Execute the sections command.
    ///
    /// # Errors
    ///
    /// Returns an error if the landing document cannot be fetched.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config()?;
        let client = ContentClient::from_config(&config);

        output.info(&format!("Content API: {}", config.api_resolved.base_url));
        let document = client
            .landing_page()?
            .ok_or_else(|| CliError::NotFound("no landing page published".to_owned()))?;

        let presence = document.presence();
        output.emit(&serde_json::to_string_pretty(&presence)?)?;
        Ok(())
    }
}
