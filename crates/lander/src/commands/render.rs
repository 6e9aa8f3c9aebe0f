//! `lander render` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use lander_config::Config;
use lander_content::{ContentClient, ContentSource};
use lander_pages::{
    InfoPage, PageChrome, PageOptions, PageView, SalesPage, SalesState, SettingsOutcome,
    TermsPage, TermsState,
};

use super::SourceArgs;
use crate::error::CliError;
use crate::output::Output;

/// Page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PageKind {
    /// CMS-driven sales landing page.
    Sales,
    /// Static information page.
    Info,
    /// Terms and conditions.
    Terms,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page to render.
    #[arg(value_enum)]
    page: PageKind,

    /// Expand this FAQ entry (0-based, sales page only).
    #[arg(long)]
    open_faq: Option<usize>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.source.load_config()?;

        let view = match self.page {
            PageKind::Info => InfoPage.render(),
            PageKind::Terms => render_terms(&config, &output),
            PageKind::Sales => render_sales(&config, self.open_faq, &output),
        };

        let html = view.to_document();
        match &self.output {
            Some(path) => {
                std::fs::write(path, &html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => output.emit(&html)?,
        }
        Ok(())
    }
}

fn content_source(config: &Config, output: &Output) -> Arc<dyn ContentSource> {
    output.info(&format!("Content API: {}", config.api_resolved.base_url));
    Arc::new(ContentClient::from_config(config))
}

fn render_terms(config: &Config, output: &Output) -> PageView {
    let mut page = TermsPage::new(content_source(config, output), PageOptions::from_config(config));
    if *page.load() == TermsState::NotFound {
        output.warning("Terms page not found");
    }
    page.render()
}

fn render_sales(config: &Config, open_faq: Option<usize>, output: &Output) -> PageView {
    let chrome = PageChrome::new();
    let mut page = SalesPage::new(
        content_source(config, output),
        &chrome,
        PageOptions::from_config(config),
    );

    match page.mount() {
        SalesState::Ready(_) | SalesState::Loading => {}
        SalesState::PartialFailure { failures, .. } => {
            for failure in failures {
                output.warning(&format!(
                    "{} unavailable: {}",
                    failure.resource, failure.reason
                ));
            }
        }
        SalesState::Failed(failure) => {
            output.warning(&format!("Sales page not found: {}", failure.reason));
        }
    }

    if let Some(index) = open_faq {
        page.toggle_faq(index);
    }

    if let Some(outcome) = page.wait_for_settings()
        && outcome != SettingsOutcome::Applied
    {
        output.warning("Site settings not applied; using default title");
    }

    page.render()
}
