//! CLI module - Command-line interface definitions and handlers
//!
//! Uses clap v4 with derive macros for argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

pub mod commands;
pub mod output;

/// Job title generator - classify hierarchy levels and compose job titles
#[derive(Parser, Debug)]
#[command(name = "jt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable JSON output (same as --output-format=json)
    #[arg(long, global = true, hide = true)]
    pub robot: bool,

    /// Output format (human, json, jsonl, plain, tsv)
    #[arg(long, short = 'O', global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Enable machine-readable JSON output (shorthand for --output-format=json)
    #[arg(long, short = 'm', global = true)]
    pub machine: bool,

    /// Force plain output (no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Color mode: auto, always, never
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Config file path (default: ~/.config/jobtitle/config.toml + ./jobtitle.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl Cli {
    /// Output format requested by flags, if any.
    ///
    /// Priority order:
    /// 1. `--plain` or `--color never` → Plain
    /// 2. `--output-format`
    /// 3. `--machine` / `--robot` → JSON
    #[must_use]
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.plain || self.color == Some(ColorMode::Never) {
            return Some(OutputFormat::Plain);
        }
        if let Some(fmt) = self.output_format {
            return Some(fmt);
        }
        if self.machine || self.robot {
            return Some(OutputFormat::Json);
        }
        None
    }

    /// Whether errors should be reported as JSON on stdout.
    #[must_use]
    pub fn wants_machine_errors(&self) -> bool {
        self.output_format()
            .is_some_and(|fmt| fmt.is_machine_readable())
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the hierarchy levels, lowest first
    Levels(commands::levels::LevelsArgs),

    /// Classify free-text job descriptions into hierarchy levels
    Classify(commands::classify::ClassifyArgs),

    /// Compose a final job title from division, subdivision and level
    Compose(commands::compose::ComposeArgs),

    /// Import employee records from a comma- or whitespace-delimited file
    Import(commands::import::ImportArgs),

    /// Show effective configuration
    Config(commands::config::ConfigArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}
