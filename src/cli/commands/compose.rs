//! jt compose - Preview a final job title

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::core::{HierarchyLevel, compose};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Division name
    #[arg(long, short = 'd')]
    pub division: String,

    /// Subdivision name (not rendered for chief titles, but still required)
    #[arg(long, short = 's')]
    pub subdivision: String,

    /// Hierarchy level (see `jt levels`)
    #[arg(long, short = 'l', value_enum)]
    pub level: HierarchyLevel,
}

#[derive(Debug, Serialize)]
struct ComposeReport<'a> {
    division: &'a str,
    subdivision: &'a str,
    level: HierarchyLevel,
    title: String,
}

pub fn run(ctx: &AppContext, args: &ComposeArgs) -> Result<()> {
    let title = compose(&args.division, &args.subdivision, args.level)?;
    let report = ComposeReport {
        division: &args.division,
        subdivision: &args.subdivision,
        level: args.level,
        title,
    };

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&report)),
        OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string(&report)?);
            Ok(())
        }
        OutputFormat::Tsv => {
            println!("division\tsubdivision\tlevel\ttitle");
            println!(
                "{}\t{}\t{}\t{}",
                report.division,
                report.subdivision,
                report.level.slug(),
                report.title
            );
            Ok(())
        }
        OutputFormat::Plain => {
            println!("{}", report.title);
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::for_format(ctx.output_format);
            layout
                .title(&report.title)
                .kv("Division", report.division)
                .kv("Subdivision", report.subdivision)
                .kv("Level", report.level.display_name());
            emit_human(layout);
            Ok(())
        }
    }
}
