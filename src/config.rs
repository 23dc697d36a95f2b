//! Configuration file support for license-report.
//!
//! Provides YAML-based configuration through `license-report.config.yml`
//! files, including data structures, file loading, validation and the
//! resolved settings used to wire the adapters.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{
    ClearlyDefinedClient, SnykOrgClient, SpdxLicenseTextClient, DEFAULT_REQUEST_TIMEOUT,
};
use crate::application::services::DEFAULT_COPYRIGHT_CONCURRENCY;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub spdx_base_url: Option<String>,
    pub copyright_base_url: Option<String>,
    pub custom_licenses_dir: Option<PathBuf>,
    pub include_copyright: Option<bool>,
    pub copyright_concurrency: Option<usize>,
    pub request_timeout_secs: Option<u64>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Settings with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub api_base_url: String,
    pub spdx_base_url: String,
    pub copyright_base_url: String,
    /// Directory of `{license_id}.txt` files for licenses outside the SPDX list
    pub custom_licenses_dir: Option<PathBuf>,
    pub include_copyright: bool,
    pub copyright_concurrency: usize,
    pub request_timeout: Duration,
    pub verbose: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            api_base_url: SnykOrgClient::DEFAULT_API_BASE_URL.to_string(),
            spdx_base_url: SpdxLicenseTextClient::DEFAULT_BASE_URL.to_string(),
            copyright_base_url: ClearlyDefinedClient::DEFAULT_BASE_URL.to_string(),
            custom_licenses_dir: None,
            include_copyright: false,
            copyright_concurrency: DEFAULT_COPYRIGHT_CONCURRENCY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            verbose: false,
        }
    }
}

impl From<ConfigFile> for ReportSettings {
    fn from(config: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: config.api_base_url.unwrap_or(defaults.api_base_url),
            spdx_base_url: config.spdx_base_url.unwrap_or(defaults.spdx_base_url),
            copyright_base_url: config
                .copyright_base_url
                .unwrap_or(defaults.copyright_base_url),
            custom_licenses_dir: config.custom_licenses_dir,
            include_copyright: config.include_copyright.unwrap_or(defaults.include_copyright),
            copyright_concurrency: config
                .copyright_concurrency
                .unwrap_or(defaults.copyright_concurrency),
            request_timeout: config
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            verbose: config.verbose.unwrap_or(defaults.verbose),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// A relative `custom_licenses_dir` is resolved against the directory holding
/// the config file.
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

    if let (Some(dir), Some(parent)) = (config.custom_licenses_dir.as_ref(), path.parent()) {
        if dir.is_relative() {
            config.custom_licenses_dir = Some(parent.join(dir));
        }
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

/// Resolves settings from a directory, falling back to defaults without a config file.
pub fn resolve_settings(dir: &Path) -> Result<ReportSettings> {
    Ok(discover_config(dir)?
        .map(ReportSettings::from)
        .unwrap_or_default())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let urls = [
        ("api_base_url", &config.api_base_url),
        ("spdx_base_url", &config.spdx_base_url),
        ("copyright_base_url", &config.copyright_base_url),
    ];
    for (field, value) in urls {
        if let Some(url) = value {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                bail!(
                    "Invalid config: {} must be an http(s) URL, got '{}'.\n\n\
                     💡 Hint: Use a full URL such as \"https://api.snyk.io/v1\".",
                    field,
                    url
                );
            }
        }
    }

    if config.copyright_concurrency == Some(0) {
        bail!(
            "Invalid config: copyright_concurrency must be at least 1.\n\n\
             💡 Hint: Leave it unset to use the default of {}.",
            DEFAULT_COPYRIGHT_CONCURRENCY
        );
    }

    if config.request_timeout_secs == Some(0) {
        bail!("Invalid config: request_timeout_secs must be at least 1.");
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
