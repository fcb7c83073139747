// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Billing provider client settings.
//!
//! Payment processing is out of scope; this holds what a client for the
//! billing provider is constructed with, so the rest of the app can ask
//! whether billing is configured.

/// Identifies this application to the billing provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub name: &'static str,
    pub version: &'static str,
}

pub const APP_INFO: AppInfo = AppInfo { name: "Tandem", version: env!("CARGO_PKG_VERSION") };

#[derive(Clone)]
pub struct BillingClient {
    secret_key: String,
    app_info: AppInfo,
}

impl BillingClient {
    /// An empty key yields an unconfigured client rather than an error.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self { secret_key: secret_key.into(), app_info: APP_INFO }
    }

    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// True for test-mode keys (`sk_test_…`).
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn app_info(&self) -> &AppInfo {
        &self.app_info
    }

    /// `User-Agent` value sent with provider requests.
    pub fn user_agent(&self) -> String {
        format!("{}/{}", self.app_info.name, self.app_info.version)
    }
}

impl std::fmt::Debug for BillingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingClient")
            .field("secret_key", &crate::config::redact(&self.secret_key))
            .field("app_info", &self.app_info)
            .finish()
    }
}

#[cfg(test)]
#[path = "billing_tests.rs"]
mod tests;
