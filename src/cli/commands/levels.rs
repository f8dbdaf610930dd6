//! jt levels - List the hierarchy levels

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, emit_tsv, robot_ok,
};
use crate::core::HierarchyLevel;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct LevelsArgs {
    /// List highest level first
    #[arg(long)]
    pub reverse: bool,
}

#[derive(Debug, Serialize)]
struct LevelEntry {
    rank: usize,
    slug: &'static str,
    name: &'static str,
}

fn entries(reverse: bool) -> Vec<LevelEntry> {
    let mut entries: Vec<_> = HierarchyLevel::all()
        .map(|level| LevelEntry {
            rank: level.rank() + 1,
            slug: level.slug(),
            name: level.display_name(),
        })
        .collect();
    if reverse {
        entries.reverse();
    }
    entries
}

pub fn run(ctx: &AppContext, args: &LevelsArgs) -> Result<()> {
    let entries = entries(args.reverse);
    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&entries)),
        OutputFormat::Jsonl => emit_jsonl(&entries),
        OutputFormat::Tsv => {
            emit_tsv(&["rank", "slug", "name"], &entries, |e| {
                vec![e.rank.to_string(), e.slug.to_string(), e.name.to_string()]
            });
            Ok(())
        }
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.name);
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::for_format(ctx.output_format);
            layout.title("Hierarchy Levels");
            for entry in &entries {
                layout.push_line(format!("{:>2}. {:<24} {}", entry.rank, entry.name, entry.slug));
            }
            emit_human(layout);
            Ok(())
        }
    }
}
