//! jt import - Import employee records and generate their titles

use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::app::AppContext;
use crate::cli::output::{
    HumanLayout, OutputFormat, emit_human, emit_json, emit_jsonl, emit_tsv, robot_ok,
};
use crate::core::HierarchyLevel;
use crate::error::{JtError, Result};
use crate::ingest::{DelimiterMode, EncodingChoice, HeaderSource, ingest};
use crate::records::{
    EXPORT_HEADER, Record, RecordFilter, RecordSet, SkippedRow, export_csv, records_from_table,
};

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// File to import
    pub file: PathBuf,

    /// Character encoding of the file (default from config: utf-8)
    #[arg(long, short = 'e', value_enum)]
    pub encoding: Option<EncodingChoice>,

    /// Field separator (default from config: comma)
    #[arg(long, value_enum)]
    pub mode: Option<DelimiterMode>,

    /// Keep only these divisions (repeatable)
    #[arg(long = "division", value_name = "DIVISION")]
    pub divisions: Vec<String>,

    /// Keep only these subdivisions (repeatable)
    #[arg(long = "subdivision", value_name = "SUBDIVISION")]
    pub subdivisions: Vec<String>,

    /// Keep only these levels (repeatable)
    #[arg(long = "level", value_name = "LEVEL", value_enum)]
    pub levels: Vec<HierarchyLevel>,

    /// Write the selected records as CSV to this path
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl ImportArgs {
    fn filter(&self) -> RecordFilter {
        RecordFilter {
            divisions: self.divisions.clone(),
            subdivisions: self.subdivisions.clone(),
            levels: self.levels.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct LevelCount {
    level: HierarchyLevel,
    count: usize,
}

#[derive(Debug, Serialize)]
struct FilterOptions<'a> {
    divisions: Vec<&'a str>,
    subdivisions: Vec<&'a str>,
    levels: Vec<HierarchyLevel>,
}

#[derive(Debug, Serialize)]
struct ExportSummary {
    path: PathBuf,
    records: usize,
}

#[derive(Debug, Serialize)]
struct ImportReport<'a> {
    file: &'a Path,
    encoding: EncodingChoice,
    mode: DelimiterMode,
    header: HeaderSource,
    columns: Vec<String>,
    rows: usize,
    dropped_lines: usize,
    skipped: Vec<SkippedRow>,
    total_records: usize,
    level_counts: Vec<LevelCount>,
    options: FilterOptions<'a>,
    records: Vec<&'a Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported: Option<ExportSummary>,
}

pub fn run(ctx: &AppContext, args: &ImportArgs) -> Result<()> {
    let encoding = args.encoding.unwrap_or(ctx.config.ingest.encoding);
    let mode = args.mode.unwrap_or(ctx.config.ingest.mode);

    let bytes = std::fs::read(&args.file).map_err(|err| {
        JtError::InvalidInput(format!("cannot read {}: {err}", args.file.display()))
    })?;
    let table = ingest(&bytes, encoding, mode)?;
    let conversion = records_from_table(&table)?;

    let mut set = RecordSet::new();
    set.extend(conversion.records);

    let filter = args.filter();
    let selected: Vec<&Record> = set.filtered(&filter).collect();
    debug!(selected = selected.len(), total = set.len(), "applied filter");

    let exported = match &args.export {
        Some(path) => {
            let records = export_csv(path, &selected, &ctx.config.export.timestamp_format)?;
            Some(ExportSummary {
                path: path.clone(),
                records,
            })
        }
        None => None,
    };

    let report = ImportReport {
        file: &args.file,
        encoding,
        mode,
        header: table.header(),
        columns: table.columns().to_vec(),
        rows: table.len(),
        dropped_lines: table.dropped_rows(),
        skipped: conversion.skipped,
        total_records: set.len(),
        level_counts: set
            .level_counts()
            .into_iter()
            .map(|(level, count)| LevelCount { level, count })
            .collect(),
        options: FilterOptions {
            divisions: set.distinct_divisions(),
            subdivisions: set.distinct_subdivisions(),
            levels: set.distinct_levels(),
        },
        records: selected,
        exported,
    };

    emit_report(ctx, &report)
}

fn record_row(record: &Record) -> Vec<String> {
    vec![
        record.final_title().to_string(),
        record.employee_id().to_string(),
        record.job_code().to_string(),
        record.division().to_string(),
        record.subdivision().to_string(),
        record.hierarchy_level().display_name().to_string(),
        record.raw_job_text().unwrap_or_default().to_string(),
    ]
}

fn emit_report(ctx: &AppContext, report: &ImportReport<'_>) -> Result<()> {
    match ctx.output_format {
        OutputFormat::Json => {
            let warnings = report
                .skipped
                .iter()
                .map(|row| format!("line {}: {}", row.line, row.reason))
                .collect();
            emit_json(&robot_ok(report).with_warnings(warnings))
        }
        OutputFormat::Jsonl => emit_jsonl(&report.records),
        OutputFormat::Tsv => {
            let mut headers: Vec<&str> = EXPORT_HEADER[..6].to_vec();
            headers.push("JOB_TEXT");
            emit_tsv(&headers, &report.records, |r| record_row(r));
            Ok(())
        }
        OutputFormat::Plain => {
            for record in &report.records {
                println!("{}", record.final_title());
            }
            Ok(())
        }
        OutputFormat::Human => {
            emit_human(human_layout(ctx.output_format, report));
            Ok(())
        }
    }
}

fn human_layout(format: OutputFormat, report: &ImportReport<'_>) -> HumanLayout {
    let mut layout = HumanLayout::for_format(format);
    layout
        .title(&format!("Import: {}", report.file.display()))
        .kv("Encoding", report.encoding.label())
        .kv("Mode", report.mode.label())
        .kv("Header", header_label(report.header))
        .kv("Rows", &report.rows.to_string())
        .kv("Dropped lines", &report.dropped_lines.to_string())
        .kv("Skipped rows", &report.skipped.len().to_string())
        .kv(
            "Records",
            &format!("{} of {}", report.records.len(), report.total_records),
        );
    if let Some(exported) = &report.exported {
        layout.kv(
            "Exported",
            &format!("{} ({} records)", exported.path.display(), exported.records),
        );
    }

    if !report.records.is_empty() {
        layout.blank().section("Records");
        for record in &report.records {
            layout.push_line(format!(
                "{:<48} {:<10} {}",
                record.final_title(),
                record.employee_id(),
                record.job_code()
            ));
        }
    }

    if !report.level_counts.is_empty() {
        layout.blank().section("Levels");
        for entry in &report.level_counts {
            layout.kv(entry.level.display_name(), &entry.count.to_string());
        }
    }

    if !report.skipped.is_empty() {
        layout.blank().section("Skipped");
        for row in &report.skipped {
            layout.bullet(&format!("line {}: {}", row.line, row.reason));
        }
    }
    layout
}

const fn header_label(header: HeaderSource) -> &'static str {
    match header {
        HeaderSource::Detected => "detected",
        HeaderSource::FixedLayout => "assumed 7-column layout",
        HeaderSource::Generic => "generated (positional columns)",
        HeaderSource::FirstRow => "first row",
    }
}
