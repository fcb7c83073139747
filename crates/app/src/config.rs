// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Application configuration.
//!
//! Values come from an optional TOML file, then environment variables
//! override them.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env;

/// Default maximum request body for server actions ("2mb").
pub const DEFAULT_BODY_SIZE_LIMIT: u64 = 2 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid size {0:?} (expected e.g. \"512kb\", \"2mb\")")]
    InvalidSize(String),

    #[error("could not determine log directory")]
    NoLogDir,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    billing: BillingSection,
    server: ServerSection,
    images: ImagesSection,
    log: LogSection,
    notifications: NotificationsSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BillingSection {
    secret_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ServerSection {
    body_size_limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ImagesSection {
    domains: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LogSection {
    dir: Option<PathBuf>,
    filter: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NotificationsSection {
    desktop: Option<bool>,
}

/// Resolved configuration
#[derive(Clone)]
pub struct Config {
    /// Billing provider secret key (empty when billing is not configured)
    pub billing_secret_key: String,
    /// Maximum request body accepted by server actions, in bytes
    pub body_size_limit: u64,
    /// Hosts remote images may be loaded from
    pub image_domains: Vec<String>,
    /// Directory for rolling log files
    pub log_dir: PathBuf,
    /// Tracing filter directive
    pub log_filter: String,
    /// Show toasts as desktop notifications instead of log lines
    pub desktop_notifications: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("billing_secret_key", &redact(&self.billing_secret_key))
            .field("body_size_limit", &self.body_size_limit)
            .field("image_domains", &self.image_domains)
            .field("log_dir", &self.log_dir)
            .field("log_filter", &self.log_filter)
            .field("desktop_notifications", &self.desktop_notifications)
            .finish()
    }
}

impl Config {
    /// Load from the config file (if any) and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(env::config_path().as_deref())
    }

    /// Load from an explicit file path (or none) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
                toml::from_str(&text)?
            }
            None => FileConfig::default(),
        };
        let config = Self::resolve(file)?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Parse TOML text and apply environment overrides.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Self::resolve(toml::from_str(text)?)
    }

    fn resolve(file: FileConfig) -> Result<Self, ConfigError> {
        let body_size_limit = match file.server.body_size_limit {
            Some(size) => parse_size(&size)?,
            None => DEFAULT_BODY_SIZE_LIMIT,
        };
        let log_dir = match (env::log_dir(), file.log.dir) {
            (Some(dir), _) | (None, Some(dir)) => dir,
            (None, None) => env::default_log_dir()?,
        };

        Ok(Self {
            billing_secret_key: env::billing_secret_key()
                .or(file.billing.secret_key)
                .unwrap_or_default(),
            body_size_limit,
            image_domains: file.images.domains,
            log_dir,
            log_filter: env::log_filter()
                .or(file.log.filter)
                .unwrap_or_else(|| "info".to_string()),
            desktop_notifications: env::desktop_notifications()
                .or(file.notifications.desktop)
                .unwrap_or(false),
        })
    }

    /// Whether remote images from `host` may be displayed.
    pub fn allows_image_host(&self, host: &str) -> bool {
        self.image_domains.iter().any(|d| d.eq_ignore_ascii_case(host))
    }
}

/// Parse a human size such as `"2mb"`, `"512kb"`, `"1gb"` or `"100"` (bytes).
pub fn parse_size(text: &str) -> Result<u64, ConfigError> {
    let lower = text.trim().to_ascii_lowercase();
    let split = lower.find(|c: char| !c.is_ascii_digit()).unwrap_or(lower.len());
    let (digits, unit) = lower.split_at(split);
    let invalid = || ConfigError::InvalidSize(text.to_string());

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    let multiplier: u64 = match unit.trim() {
        "" | "b" => 1,
        "kb" => 1024,
        "mb" => 1024 * 1024,
        "gb" => 1024 * 1024 * 1024,
        _ => return Err(invalid()),
    };
    value.checked_mul(multiplier).ok_or_else(invalid)
}

/// Show only a short prefix of a secret.
pub(crate) fn redact(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        format!("{}…", tandem_core::short(secret, 7))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
