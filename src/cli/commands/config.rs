//! jt config - Show effective configuration

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, OutputFormat, emit_human, emit_json, robot_ok};
use crate::config::Config;
use crate::error::{JtError, Result};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print a single value by dotted key (e.g. `ingest.mode`)
    pub key: Option<String>,

    /// List the config files that are consulted and whether they exist
    #[arg(long)]
    pub paths: bool,
}

#[derive(Debug, Serialize)]
struct ConfigSource {
    kind: &'static str,
    path: PathBuf,
    exists: bool,
}

fn sources(ctx: &AppContext) -> Result<Vec<ConfigSource>> {
    let source = |kind, path: PathBuf| ConfigSource {
        kind,
        exists: path.exists(),
        path,
    };
    if let Some(path) = &ctx.config_path {
        return Ok(vec![source("explicit", path.clone())]);
    }
    if let Some(path) = std::env::var_os("JT_CONFIG") {
        return Ok(vec![source("explicit", PathBuf::from(path))]);
    }
    let mut list = Vec::new();
    if let Some(path) = Config::global_path() {
        list.push(source("global", path));
    }
    list.push(source("project", Config::project_path(&std::env::current_dir()?)));
    Ok(list)
}

fn config_value_at(config: &Config, key: &str) -> Result<toml::Value> {
    let mut current = toml::Value::try_from(config)
        .map_err(|err| JtError::Config(format!("render config: {err}")))?;
    for part in key.split('.') {
        current = current
            .get(part)
            .cloned()
            .ok_or_else(|| JtError::Config(format!("unknown config key: {key}")))?;
    }
    Ok(current)
}

fn format_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn run(ctx: &AppContext, args: &ConfigArgs) -> Result<()> {
    if args.paths {
        let sources = sources(ctx)?;
        return match ctx.output_format {
            OutputFormat::Json => emit_json(&robot_ok(&sources)),
            _ => {
                let mut layout = HumanLayout::for_format(ctx.output_format);
                for src in &sources {
                    let state = if src.exists { "" } else { " (missing)" };
                    layout.kv(src.kind, &format!("{}{state}", src.path.display()));
                }
                emit_human(layout);
                Ok(())
            }
        };
    }

    if let Some(key) = &args.key {
        let value = config_value_at(&ctx.config, key)?;
        if ctx.robot_mode {
            return emit_json(&robot_ok(&value));
        }
        println!("{}", format_value(&value));
        return Ok(());
    }

    if ctx.robot_mode {
        return emit_json(&robot_ok(&ctx.config));
    }
    let rendered = toml::to_string_pretty(&ctx.config)
        .map_err(|err| JtError::Config(format!("render config: {err}")))?;
    print!("{rendered}");
    Ok(())
}
