// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator search over the user directory.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tandem_core::{CollaboratorSet, User};
use thiserror::Error;

/// Maximum results returned by a search unless configured otherwise.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}

/// Looks up users that can be invited to a workspace
#[async_trait]
pub trait CollaboratorSearch: Clone + Send + Sync + 'static {
    /// Users matching `query`, excluding anyone already in `existing`.
    async fn search(
        &self,
        query: &str,
        existing: &CollaboratorSet,
    ) -> Result<Vec<User>, SearchError>;
}

/// Directory held in memory, searched in insertion order.
#[derive(Clone)]
pub struct MemoryDirectory {
    users: Arc<RwLock<Vec<User>>>,
    limit: usize,
}

impl MemoryDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(RwLock::new(users)), limit: DEFAULT_SEARCH_LIMIT }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Add a user, replacing any entry with the same ID.
    pub fn upsert(&self, user: User) {
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user,
            None => users.push(user),
        }
    }
}

impl Default for MemoryDirectory {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CollaboratorSearch for MemoryDirectory {
    async fn search(
        &self,
        query: &str,
        existing: &CollaboratorSet,
    ) -> Result<Vec<User>, SearchError> {
        let users = self.users.read();
        let found: Vec<User> = users
            .iter()
            .filter(|u| !existing.contains(&u.id) && u.matches(query))
            .take(self.limit)
            .cloned()
            .collect();
        tracing::trace!(query, results = found.len(), "collaborator search");
        Ok(found)
    }
}

#[cfg(test)]
#[path = "directory_tests.rs"]
mod tests;
