//! jt - Job title generator CLI
//!
//! Classify free-text job descriptions into hierarchy levels, import
//! employee files and compose final job titles.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use jobtitle::JtError;
use jobtitle::app::AppContext;
use jobtitle::cli::Cli;
use jobtitle::cli::output::{emit_json, robot_error_structured};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let ctx = match AppContext::from_cli(&cli) {
        Ok(ctx) => ctx,
        Err(e) => return report(&e, cli.wants_machine_errors()),
    };

    match jobtitle::cli::commands::run(&ctx, &cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, ctx.output_format.is_machine_readable()),
    }
}

fn report(err: &JtError, machine: bool) -> ExitCode {
    if machine {
        // Machine mode: structured JSON error on stdout
        if emit_json(&robot_error_structured(err)).is_err() {
            eprintln!("Error: {err}");
        }
    } else {
        eprintln!("Error: {err}");
    }
    ExitCode::FAILURE
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,jobtitle=info",
        1 => "info,jobtitle=debug",
        2 => "debug,jobtitle=trace",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.wants_machine_errors() {
        // JSON logging for machine mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
