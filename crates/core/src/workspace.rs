// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace records and permission modes.
//!
//! A workspace is a named container of documents owned by one user. Its ID is
//! generated client-side before the record is handed to the store, and never
//! changes afterwards.

use crate::clock::epoch_ms_to_utc;
use crate::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

crate::define_id! {
    /// Unique identifier for a workspace (UUID v4 in production).
    pub struct WorkspaceId;
}

/// Icon given to new workspaces.
pub const DEFAULT_ICON: &str = "💼";

/// Whether a workspace is owner-only or shared with collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionMode {
    #[default]
    Private,
    Shared,
}

crate::simple_display! {
    PermissionMode {
        Private => "private",
        Shared => "shared",
    }
}

impl PermissionMode {
    pub fn is_shared(self) -> bool {
        matches!(self, PermissionMode::Shared)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown permission mode: {0:?} (expected \"private\" or \"shared\")")]
pub struct ParsePermissionError(pub String);

impl FromStr for PermissionMode {
    type Err = ParsePermissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "private" => Ok(PermissionMode::Private),
            "shared" => Ok(PermissionMode::Shared),
            _ => Err(ParsePermissionError(s.to_string())),
        }
    }
}

/// A workspace as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub title: String,
    #[serde(rename = "workspaceOwner")]
    pub owner: UserId,
    pub permission: PermissionMode,
    /// Epoch ms; stored as an RFC 3339 `createdAt` timestamp.
    #[serde(rename = "createdAt", with = "iso_timestamp")]
    pub created_at_ms: u64,
    #[serde(rename = "iconId")]
    pub icon: String,
    pub banner_url: String,
    pub logo: Option<String>,
    /// Empty unless the workspace has been moved to trash.
    pub in_trash: String,
    pub data: Option<String>,
}

impl Workspace {
    /// Build a fresh workspace with default icon, banner, logo and trash state.
    pub fn new(
        id: WorkspaceId,
        title: impl Into<String>,
        owner: UserId,
        permission: PermissionMode,
        created_at_ms: u64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            owner,
            permission,
            created_at_ms,
            icon: DEFAULT_ICON.to_string(),
            banner_url: String::new(),
            logo: None,
            in_trash: String::new(),
            data: None,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        epoch_ms_to_utc(self.created_at_ms)
    }

    pub fn is_trashed(&self) -> bool {
        !self.in_trash.is_empty()
    }
}

/// `createdAt` as the store writes it: RFC 3339, millisecond precision, `Z`.
mod iso_timestamp {
    use crate::clock::epoch_ms_to_utc;
    use chrono::{DateTime, SecondsFormat};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ms: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&epoch_ms_to_utc(*ms).to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        let parsed = DateTime::parse_from_rfc3339(&text).map_err(de::Error::custom)?;
        u64::try_from(parsed.timestamp_millis())
            .map_err(|_| de::Error::custom(format!("timestamp before 1970: {}", text)))
    }
}

crate::builder! {
    pub struct WorkspaceBuilder => Workspace {
        into {
            id: WorkspaceId = "ws-test",
            title: String = "Engineering",
            owner: UserId = "user-1",
            icon: String = DEFAULT_ICON,
            banner_url: String = "",
            in_trash: String = "",
        }
        set {
            permission: PermissionMode = PermissionMode::Private,
            created_at_ms: u64 = 1_000_000,
            logo: Option<String> = None,
            data: Option<String> = None,
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
