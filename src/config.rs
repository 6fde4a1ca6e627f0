//! Configuration file support for cd-license-check.
//!
//! Provides YAML-based configuration through `cd-license-check.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "cd-license-check.config.yml";

/// Largest accepted `batch_size`
pub const MAX_BATCH_SIZE: usize = 1000;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub approved_licenses: Option<Vec<String>>,
    pub threshold: Option<i64>,
    pub exclude: Option<Vec<String>>,
    pub clearlydefined_url: Option<String>,
    pub batch_size: Option<usize>,
    pub timeout_seconds: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| OutputFormat::from_str(f).map_err(|e| anyhow::anyhow!("Invalid config: {}", e)))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.output_format()?;

    if let Some(threshold) = config.threshold {
        if !(0..=100).contains(&threshold) {
            bail!(
                "Invalid config: threshold must be between 0 and 100, got {}.\n\n\
                 💡 Hint: ClearlyDefined effective scores range from 0 to 100.",
                threshold
            );
        }
    }

    if let Some(batch_size) = config.batch_size {
        if !(1..=MAX_BATCH_SIZE).contains(&batch_size) {
            bail!(
                "Invalid config: batch_size must be between 1 and {}, got {}.",
                MAX_BATCH_SIZE,
                batch_size
            );
        }
    }

    if config.timeout_seconds == Some(0) {
        bail!("Invalid config: timeout_seconds must be at least 1.");
    }

    if let Some(ref licenses) = config.approved_licenses {
        for (i, license) in licenses.iter().enumerate() {
            if license.trim().is_empty() {
                bail!(
                    "Invalid config: approved_licenses[{}] must not be empty.\n\n\
                     💡 Hint: Use SPDX expressions such as \"MIT\" or \"Apache-2.0\".",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
