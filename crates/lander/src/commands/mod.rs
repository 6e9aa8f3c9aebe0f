//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod sections;

use std::path::PathBuf;

use clap::Args;
use lander_config::{CliSettings, Config, Mode};

use crate::error::CliError;

pub(crate) use render::RenderArgs;
pub(crate) use sections::SectionsArgs;

/// Options selecting the content source, shared by all commands.
#[derive(Args)]
pub(crate) struct SourceArgs {
    /// Path to configuration file (default: auto-discover lander.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Environment mode: development or production (overrides config).
    #[arg(long, env = "LANDER_MODE")]
    mode: Option<Mode>,

    /// Content API base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Frontend origin sent as X-Frontend-Url (overrides config).
    #[arg(long)]
    frontend_url: Option<String>,

    /// Enable verbose output (log every fetch).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SourceArgs {
    /// Load configuration with command-line overrides applied.
    pub(crate) fn load_config(self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            mode: self.mode,
            base_url: self.base_url,
            frontend_url: self.frontend_url,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}
