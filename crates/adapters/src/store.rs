// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace persistence gateway.
//!
//! The hosted database is an external collaborator; this module defines the
//! two calls the creation flow makes against it, plus an in-memory store used
//! for local runs and integration tests.

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tandem_core::{CollaboratorSet, User, UserId, Workspace, WorkspaceId};
use thiserror::Error;

/// Errors reported by a workspace store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("workspace already exists: {0}")]
    Duplicate(WorkspaceId),
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(WorkspaceId),
    #[error("store rejected request: {0}")]
    Rejected(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Gateway for durably recording workspaces and their collaborators
#[async_trait]
pub trait WorkspaceStore: Clone + Send + Sync + 'static {
    /// Insert a new workspace record.
    async fn create_workspace(&self, workspace: &Workspace) -> Result<(), StoreError>;

    /// Grant each user access to the workspace.
    async fn add_collaborators(
        &self,
        collaborators: &[User],
        workspace_id: &WorkspaceId,
    ) -> Result<(), StoreError>;
}

#[derive(Default)]
struct MemoryState {
    workspaces: IndexMap<WorkspaceId, Workspace>,
    collaborators: HashMap<WorkspaceId, CollaboratorSet>,
}

/// In-process store. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryWorkspaceStore {
    inner: Arc<Mutex<MemoryState>>,
}

impl MemoryWorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workspace(&self, id: &WorkspaceId) -> Option<Workspace> {
        self.inner.lock().workspaces.get(id).cloned()
    }

    /// Collaborators of a workspace in the order they were added.
    pub fn collaborators(&self, id: &WorkspaceId) -> Vec<User> {
        self.inner.lock().collaborators.get(id).map(CollaboratorSet::to_vec).unwrap_or_default()
    }

    /// Workspaces the user owns, followed by workspaces shared with them.
    /// Trashed workspaces are left out.
    pub fn workspaces_for(&self, user: &UserId) -> Vec<Workspace> {
        let inner = self.inner.lock();
        let live = inner.workspaces.values().filter(|ws| !ws.is_trashed());
        let (owned, others): (Vec<&Workspace>, Vec<&Workspace>) =
            live.partition(|ws| ws.owner == *user);
        let shared = others.into_iter().filter(|ws| {
            inner.collaborators.get(&ws.id).is_some_and(|set| set.contains(user))
        });
        owned.into_iter().chain(shared).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().workspaces.is_empty()
    }
}

#[async_trait]
impl WorkspaceStore for MemoryWorkspaceStore {
    async fn create_workspace(&self, workspace: &Workspace) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if inner.workspaces.contains_key(&workspace.id) {
            return Err(StoreError::Duplicate(workspace.id.clone()));
        }
        if workspace.title.trim().is_empty() {
            return Err(StoreError::Rejected("title must not be empty".to_string()));
        }
        inner.workspaces.insert(workspace.id.clone(), workspace.clone());
        tracing::debug!(workspace_id = %workspace.id, owner = %workspace.owner, "workspace stored");
        Ok(())
    }

    async fn add_collaborators(
        &self,
        collaborators: &[User],
        workspace_id: &WorkspaceId,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        if !inner.workspaces.contains_key(workspace_id) {
            return Err(StoreError::WorkspaceNotFound(workspace_id.clone()));
        }
        inner
            .collaborators
            .entry(workspace_id.clone())
            .or_default()
            .extend(collaborators.iter().cloned());
        tracing::debug!(%workspace_id, count = collaborators.len(), "collaborators stored");
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{StoreError, WorkspaceStore};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tandem_core::{User, Workspace, WorkspaceId};
    use tokio::sync::Notify;

    /// Recorded store call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StoreCall {
        CreateWorkspace(Workspace),
        AddCollaborators { collaborators: Vec<User>, workspace_id: WorkspaceId },
    }

    #[derive(Default)]
    struct FakeStoreState {
        calls: Vec<StoreCall>,
        create_error: Option<StoreError>,
        add_error: Option<StoreError>,
        gate: Option<Arc<Notify>>,
    }

    /// Fake store that records calls and can be told to fail or stall
    #[derive(Clone, Default)]
    pub struct FakeWorkspaceStore {
        inner: Arc<Mutex<FakeStoreState>>,
    }

    impl FakeWorkspaceStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded calls
        pub fn calls(&self) -> Vec<StoreCall> {
            self.inner.lock().calls.clone()
        }

        /// Workspaces passed to `create_workspace`
        pub fn created(&self) -> Vec<Workspace> {
            self.calls()
                .into_iter()
                .filter_map(|call| match call {
                    StoreCall::CreateWorkspace(ws) => Some(ws),
                    StoreCall::AddCollaborators { .. } => None,
                })
                .collect()
        }

        /// Make `create_workspace` return this error
        pub fn fail_create(&self, error: StoreError) {
            self.inner.lock().create_error = Some(error);
        }

        /// Make `add_collaborators` return this error
        pub fn fail_add_collaborators(&self, error: StoreError) {
            self.inner.lock().add_error = Some(error);
        }

        /// Stall `create_workspace` (after recording) until the returned
        /// handle is notified.
        pub fn gate_create(&self) -> Arc<Notify> {
            let gate = Arc::new(Notify::new());
            self.inner.lock().gate = Some(Arc::clone(&gate));
            gate
        }
    }

    #[async_trait]
    impl WorkspaceStore for FakeWorkspaceStore {
        async fn create_workspace(&self, workspace: &Workspace) -> Result<(), StoreError> {
            let (gate, error) = {
                let mut inner = self.inner.lock();
                inner.calls.push(StoreCall::CreateWorkspace(workspace.clone()));
                (inner.gate.clone(), inner.create_error.clone())
            };
            if let Some(gate) = gate {
                gate.notified().await;
            }
            match error {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }

        async fn add_collaborators(
            &self,
            collaborators: &[User],
            workspace_id: &WorkspaceId,
        ) -> Result<(), StoreError> {
            let mut inner = self.inner.lock();
            inner.calls.push(StoreCall::AddCollaborators {
                collaborators: collaborators.to_vec(),
                workspace_id: workspace_id.clone(),
            });
            match inner.add_error.clone() {
                Some(e) => Err(e),
                None => Ok(()),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeWorkspaceStore, StoreCall};

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
