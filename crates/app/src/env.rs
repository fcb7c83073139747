// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the app crate.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Config file: TANDEM_CONFIG > <config dir>/tandem/config.toml
///
/// The default location is only returned if the file exists; an explicit
/// `TANDEM_CONFIG` is returned as-is so a typo surfaces as an error.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("TANDEM_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("tandem").join("config.toml")).filter(|p| p.exists())
}

/// Billing provider secret key, if set and non-empty
pub fn billing_secret_key() -> Option<String> {
    std::env::var("STRIPE_SECRET_KEY").ok().filter(|s| !s.is_empty())
}

/// Log directory override
pub fn log_dir() -> Option<PathBuf> {
    std::env::var_os("TANDEM_LOG_DIR").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default log directory: <state dir>/tandem/logs > ~/.local/state/tandem/logs
pub fn default_log_dir() -> Result<PathBuf, ConfigError> {
    if let Some(state) = dirs::state_dir() {
        return Ok(state.join("tandem").join("logs"));
    }
    let home = std::env::var("HOME").map_err(|_| ConfigError::NoLogDir)?;
    Ok(PathBuf::from(home).join(".local/state/tandem/logs"))
}

/// Tracing filter directive (default "info")
pub fn log_filter() -> Option<String> {
    std::env::var("TANDEM_LOG").ok().filter(|s| !s.is_empty())
}

/// Whether toasts should go to the desktop notification center
pub fn desktop_notifications() -> Option<bool> {
    std::env::var("TANDEM_DESKTOP_NOTIFY")
        .ok()
        .map(|v| ["1", "true", "yes"].iter().any(|on| v.trim().eq_ignore_ascii_case(on)))
}
