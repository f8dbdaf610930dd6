//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::Result;

pub mod classify;
pub mod completions;
pub mod compose;
pub mod config;
pub mod import;
pub mod levels;

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Levels(args) => levels::run(ctx, args),
        Commands::Classify(args) => classify::run(ctx, args),
        Commands::Compose(args) => compose::run(ctx, args),
        Commands::Import(args) => import::run(ctx, args),
        Commands::Config(args) => config::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
