//! Configuration file support for bom-resolver.
//!
//! Provides YAML-based configuration through `bom-resolver.config.yml`
//! files, including data structures, file loading, and validation.

use anyhow::{bail, Context};
use bom_resolver::application::dto::OutputFormat;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bom_resolver::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-resolver.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub tenant: Option<String>,
    /// Relative paths are resolved against the config file's directory.
    pub catalog: Option<PathBuf>,
    pub store_url: Option<String>,
    pub store_token: Option<String>,
    pub format: Option<String>,
    pub timeout_secs: Option<u64>,
    pub detect_cycles: Option<bool>,
    pub lang: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>())
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
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

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.catalog = config
            .catalog
            .take()
            .map(|catalog| if catalog.is_relative() { base.join(catalog) } else { catalog });
    }

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
    if config.tenant.as_deref().is_some_and(|t| t.trim().is_empty()) {
        bail!(
            "Invalid config: tenant must not be empty.\n\n\
             💡 Hint: Remove the 'tenant' key or set it to a tenant id (e.g., \"shop-1\")."
        );
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a number of seconds such as 15."
        );
    }

    if config.catalog.is_some() && config.store_url.is_some() {
        bail!(
            "Invalid config: catalog and store_url cannot both be set.\n\n\
             💡 Hint: Keep the product source you want to resolve against."
        );
    }

    config.output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
