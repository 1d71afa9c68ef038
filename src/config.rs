//! Configuration file support for repo-sbom.
//!
//! Provides YAML-based configuration through `repo-sbom.config.yml` files,
//! including data structures, file loading, validation and the merge with
//! command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::GitHubClient;
use crate::application::services::RateLimitMonitor;
use crate::application::use_cases::ScanPacing;
use crate::cli::Args;
use crate::repository_analysis::services::DEFAULT_MANIFEST_CANDIDATES;
use crate::shared::error::DashboardError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "repo-sbom.config.yml";

/// Environment variable consulted for the API token
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub token: Option<String>,
    pub api_base_url: Option<String>,
    pub manifest_candidates: Option<Vec<String>>,
    pub allow_mock_fallback: Option<bool>,
    pub scan_delay_ms: Option<u64>,
    pub scan_jitter_ms: Option<u64>,
    pub rate_limit_warning_threshold: Option<u32>,
    pub rate_limit_check_interval_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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
    if let Some(url) = &config.api_base_url {
        if url.trim().is_empty() {
            return Err(DashboardError::Validation {
                message: "api_base_url must not be empty".to_string(),
            }
            .into());
        }
    }

    if let Some(candidates) = &config.manifest_candidates {
        if let Some(index) = candidates.iter().position(|c| c.trim().is_empty()) {
            return Err(DashboardError::Validation {
                message: format!("manifest_candidates[{}] must not be empty", index),
            }
            .into());
        }
    }

    if config.rate_limit_check_interval_secs == Some(0) {
        return Err(DashboardError::Validation {
            message: "rate_limit_check_interval_secs must be greater than zero".to_string(),
        }
        .into());
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

/// Effective settings after merging flags, config file and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub token: Option<String>,
    pub api_base_url: String,
    pub manifest_candidates: Vec<String>,
    pub allow_mock_fallback: bool,
    pub pacing: ScanPacing,
    pub rate_limit_warning_threshold: u32,
    pub rate_limit_check_interval: Duration,
}

impl Settings {
    /// CLI flag > config file > environment (token only) > default
    pub fn resolve(args: &Args, config: Option<&ConfigFile>, env_token: Option<String>) -> Self {
        let token = args
            .token
            .clone()
            .or_else(|| config.and_then(|c| c.token.clone()))
            .or(env_token)
            .filter(|t| !t.trim().is_empty());

        let api_base_url = args
            .api_base_url
            .clone()
            .or_else(|| config.and_then(|c| c.api_base_url.clone()))
            .unwrap_or_else(|| GitHubClient::DEFAULT_API_URL.to_string());

        let manifest_candidates = config
            .and_then(|c| c.manifest_candidates.clone())
            .unwrap_or_else(|| {
                DEFAULT_MANIFEST_CANDIDATES
                    .iter()
                    .map(|name| name.to_string())
                    .collect()
            });

        let allow_mock_fallback = !args.strict
            && config
                .and_then(|c| c.allow_mock_fallback)
                .unwrap_or(true);

        let pacing = if args.no_pause {
            ScanPacing::NONE
        } else {
            ScanPacing {
                delay_ms: config
                    .and_then(|c| c.scan_delay_ms)
                    .unwrap_or(ScanPacing::DEFAULT.delay_ms),
                jitter_ms: config
                    .and_then(|c| c.scan_jitter_ms)
                    .unwrap_or(ScanPacing::DEFAULT.jitter_ms),
            }
        };

        Self {
            token,
            api_base_url,
            manifest_candidates,
            allow_mock_fallback,
            pacing,
            rate_limit_warning_threshold: config
                .and_then(|c| c.rate_limit_warning_threshold)
                .unwrap_or(RateLimitMonitor::DEFAULT_THRESHOLD),
            rate_limit_check_interval: config
                .and_then(|c| c.rate_limit_check_interval_secs)
                .map(Duration::from_secs)
                .unwrap_or(RateLimitMonitor::DEFAULT_INTERVAL),
        }
    }
}
