// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User records, as selected for collaboration.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier assigned to a user by the auth provider.
    pub struct UserId;
}

/// A user identity that can own a workspace or be invited to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn new(id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self { id: id.into(), email: email.into(), full_name: None, avatar_url: None }
    }

    crate::setters! {
        option { full_name: String, avatar_url: String }
    }

    /// Name to show in lists: the full name when set, else the email.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let name = self.display_name();
        let mut words = name.split_whitespace();
        let initials: String = match (words.next(), words.last()) {
            (Some(first), Some(last)) => first.chars().take(1).chain(last.chars().take(1)).collect(),
            (Some(only), None) => only.chars().take(2).collect(),
            _ => String::new(),
        };
        initials.to_uppercase()
    }

    /// Case-insensitive substring match against email and full name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        self.email.to_lowercase().contains(&query)
            || self.full_name.as_deref().is_some_and(|n| n.to_lowercase().contains(&query))
    }
}

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;
