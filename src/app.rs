//! Per-invocation application context.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::cli::output::OutputFormat;
use crate::config::Config;
use crate::error::Result;

/// Everything a command needs besides its own arguments.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    /// Explicit config file, when one was given.
    pub config_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    /// JSON envelopes on stdout instead of human text.
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    /// Load config relative to the working directory and resolve the output
    /// format. CLI flags win over config values.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        Ok(Self::with_config(cli, config))
    }

    #[must_use]
    pub fn with_config(cli: &Cli, config: Config) -> Self {
        let output_format = cli.output_format().unwrap_or(config.output.format);
        Self {
            config_path: cli.config.clone(),
            robot_mode: output_format == OutputFormat::Json,
            output_format,
            verbosity: cli.verbose,
            config,
        }
    }
}
