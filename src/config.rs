use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::cli::output::OutputFormat;
use crate::error::{JtError, Result};
use crate::ingest::{DelimiterMode, EncodingChoice};
use crate::records::{DEFAULT_TIMESTAMP_FORMAT, validate_timestamp_format};

/// File name of the per-project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "jobtitle.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load defaults, then either the explicit file (`--config` or
    /// `JT_CONFIG`) or the global and project files, then env overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("JT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| JtError::ConfigNotFound(path.display().to_string()))?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jobtitle").join("config.toml"))
    }

    #[must_use]
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&Self::project_path(project_root))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| JtError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| JtError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.ingest {
            self.ingest.merge(patch);
        }
        if let Some(patch) = patch.export {
            self.export.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = env_parse("JT_INGEST_ENCODING", &lookup, |v| {
            v.parse::<EncodingChoice>()
        })? {
            self.ingest.encoding = value;
        }
        if let Some(value) = env_parse("JT_INGEST_MODE", &lookup, |v| v.parse::<DelimiterMode>())? {
            self.ingest.mode = value;
        }

        if let Some(value) = env_string("JT_EXPORT_TIMESTAMP_FORMAT", &lookup) {
            self.export.timestamp_format = value;
        }

        if let Some(value) = env_parse("JT_OUTPUT_FORMAT", &lookup, |v| {
            OutputFormat::from_str(v.trim(), true).map_err(JtError::InvalidInput)
        })? {
            self.output.format = value;
        }
        if env_bool("JT_ROBOT", &lookup).unwrap_or(false) {
            self.output.format = OutputFormat::Json;
        }

        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        validate_timestamp_format(&self.export.timestamp_format)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    #[serde(default)]
    pub encoding: EncodingChoice,
    #[serde(default)]
    pub mode: DelimiterMode,
}

impl IngestConfig {
    fn merge(&mut self, patch: IngestPatch) {
        if let Some(value) = patch.encoding {
            self.encoding = value;
        }
        if let Some(value) = patch.mode {
            self.mode = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

impl ExportConfig {
    fn merge(&mut self, patch: ExportPatch) {
        if let Some(value) = patch.timestamp_format {
            self.timestamp_format = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub ingest: Option<IngestPatch>,
    pub export: Option<ExportPatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct IngestPatch {
    pub encoding: Option<EncodingChoice>,
    pub mode: Option<DelimiterMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExportPatch {
    pub timestamp_format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn env_string(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn env_bool(key: &str, lookup: &impl Fn(&str) -> Option<String>) -> Option<bool> {
    lookup(key).map(|value| {
        matches!(
            value.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn env_parse<T>(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<Option<T>> {
    match env_string(key, lookup) {
        Some(value) => parse(&value)
            .map(Some)
            .map_err(|err| JtError::Config(format!("invalid {key} value {value}: {err}"))),
        None => Ok(None),
    }
}
