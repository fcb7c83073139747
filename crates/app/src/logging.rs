// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::lifecycle::LifecycleError;

/// Log file name prefix; the appender adds a date suffix.
pub const LOG_FILE_PREFIX: &str = "tandem.log";

/// Install the global subscriber writing to a daily-rolling file in
/// `config.log_dir`.
///
/// Keep the returned guard alive for the life of the process; dropping it
/// flushes and stops the background writer.
pub fn init(config: &Config) -> Result<WorkerGuard, LifecycleError> {
    std::fs::create_dir_all(&config.log_dir)?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| LifecycleError::Logging(format!("bad filter {:?}: {}", config.log_filter, e)))?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .map_err(|e| LifecycleError::Logging(e.to_string()))?;

    tracing::info!(log_dir = %config.log_dir.display(), "logging initialized");
    Ok(guard)
}
