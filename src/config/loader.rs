// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::DEFAULT_ALERT_CHANNEL;
use crate::config::PolicyConfig;
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for the query listener.
///
/// Every section is optional; an empty file yields a listener that logs every
/// stage, routes alerts by severity and writes fallback diagnostics to stderr.
///
/// # Fields
/// * `policy` - Logging and notification switches read by the policy engine
/// * `alerts` - Alert channel settings
/// * `fallback` - Where emergency diagnostics go when processing fails
///
/// # Example
/// ```yaml
/// policy:
///   log_query_created: false
///   slack_query_failure: true
/// alerts:
///   enabled: true
///   channel: "#data-platform"
/// fallback:
///   kind: file
///   path: /var/log/query-herald.fallback
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub policy: PolicyConfig,
    pub alerts: AlertsConfig,
    pub fallback: FallbackConfig,
}

/// Alert channel settings.
///
/// # Fields
/// * `enabled` - When false, no alert is delivered regardless of routing (defaults to true)
/// * `channel` - Name of the channel alerts are tagged with
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AlertsConfig {
    pub enabled: bool,
    pub channel: String,
}

impl Default for AlertsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            channel: DEFAULT_ALERT_CHANNEL.to_string(),
        }
    }
}

/// Fallback diagnostic channel settings.
#[derive(Debug, Default, Deserialize)]
pub struct FallbackConfig {
    #[serde(default)]
    pub kind: FallbackKind,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum FallbackKind {
    #[default]
    Stderr,
    File,
}

/// Load a config from a YAML or TOML file, chosen by extension.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    match extension.as_str() {
        "yaml" | "yml" => parse_yaml(&content),
        "toml" => Ok(toml::from_str(&content)?),
        _ => Err(ConfigError::UnsupportedFormat { extension }),
    }
}

/// Load a config and reject settings the listener cannot be built from.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(|problems| ConfigError::Invalid { problems })?;
    Ok(cfg)
}

// An empty YAML document deserializes as unit, not as an empty mapping.
fn parse_yaml(content: &str) -> Result<Config, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(content)?)
}
