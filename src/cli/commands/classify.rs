//! jt classify - Classify job descriptions into hierarchy levels

use std::io::BufRead;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, emit_tsv, robot_ok,
};
use crate::core::classify::DEFAULT_RULE;
use crate::core::{Classification, classify_explained};
use crate::error::{JtError, Result};

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Job description texts; `-` reads one text per line from stdin
    #[arg(required = true, num_args = 1..)]
    pub texts: Vec<String>,

    /// Show which rule decided each level and the keyword that fired
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Serialize)]
struct ClassifyItem {
    text: String,
    #[serde(flatten)]
    classification: Classification,
    name: &'static str,
}

fn read_texts(args: &ClassifyArgs) -> Result<Vec<String>> {
    if args.texts.len() == 1 && args.texts[0] == "-" {
        let stdin = std::io::stdin();
        let mut texts = Vec::new();
        for line in stdin.lock().lines() {
            texts.push(line?);
        }
        if texts.is_empty() {
            return Err(JtError::EmptyInput);
        }
        return Ok(texts);
    }
    Ok(args.texts.clone())
}

fn classify_all(texts: Vec<String>) -> Vec<ClassifyItem> {
    texts
        .into_iter()
        .map(|text| {
            let classification = classify_explained(Some(&text));
            ClassifyItem {
                name: classification.level.display_name(),
                classification,
                text,
            }
        })
        .collect()
}

fn explanation(c: &Classification) -> String {
    match &c.trigger {
        Some(trigger) => format!("rule {}: \"{trigger}\"", c.rule),
        None if c.rule == DEFAULT_RULE => format!("rule {}: default", c.rule),
        None => format!("rule {}", c.rule),
    }
}

pub fn run(ctx: &AppContext, args: &ClassifyArgs) -> Result<()> {
    let items = classify_all(read_texts(args)?);

    match ctx.output_format {
        OutputFormat::Json => emit_json(&robot_ok(&items)),
        OutputFormat::Jsonl => emit_jsonl(&items),
        OutputFormat::Tsv => {
            emit_tsv(&["text", "level", "rule"], &items, |item| {
                vec![
                    item.text.clone(),
                    item.classification.level.slug().to_string(),
                    item.classification.rule.to_string(),
                ]
            });
            Ok(())
        }
        OutputFormat::Plain => {
            for item in &items {
                println!("{}", item.name);
            }
            Ok(())
        }
        OutputFormat::Human => {
            let mut layout = HumanLayout::for_format(ctx.output_format);
            for item in &items {
                let mut line = format!("{:<24} {}", item.name, item.text);
                if args.explain {
                    line.push_str(&format!("  [{}]", explanation(&item.classification)));
                }
                layout.push_line(line);
            }
            emit_human(layout);
            Ok(())
        }
    }
}
