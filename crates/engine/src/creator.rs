// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace creation flow.
//!
//! Holds the form state behind the "create workspace" dialog (title,
//! permission mode, selected collaborators) and turns a submit into calls
//! against the store, followed by a toast and a refresh of the hosting view.
//!
//! Form state sits behind a mutex that is never held across an await, so the
//! UI can keep editing while a submit is suspended. A submit works on the
//! snapshot taken when it started.

use parking_lot::Mutex;
use std::sync::Arc;
use tandem_adapters::{
    CollaboratorSearch, NotifyAdapter, RefreshTrigger, SearchError, SessionSource, StoreError,
    WorkspaceStore,
};
use tandem_core::{
    Clock, CollaboratorSet, IdGen, PermissionMode, User, Workspace, WorkspaceId,
};
use thiserror::Error;
use tokio::sync::watch;
use tracing::Instrument;

pub const SUCCESS_TITLE: &str = "Success";
pub const SUCCESS_MESSAGE: &str = "Created the workspace";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_MESSAGE: &str = "Could not create the workspace";
pub const PARTIAL_FAILURE_MESSAGE: &str = "Created the workspace, but could not add collaborators";

/// Why a submit was refused before doing any work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    EmptyTitle,
    NoCollaborators,
    InFlight,
}

tandem_core::simple_display! {
    BlockReason {
        EmptyTitle => "title is empty",
        NoCollaborators => "shared workspace has no collaborators",
        InFlight => "a submission is already in flight",
    }
}

/// Store call that failed during a submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStage {
    Workspace,
    Collaborators,
}

tandem_core::simple_display! {
    CreateStage {
        Workspace => "create workspace",
        Collaborators => "add collaborators",
    }
}

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("failed to {stage} {workspace_id}: {source}")]
    Store {
        stage: CreateStage,
        workspace_id: WorkspaceId,
        #[source]
        source: StoreError,
    },
}

impl CreateError {
    /// True when the workspace record exists despite the error.
    pub fn workspace_created(&self) -> bool {
        match self {
            CreateError::Store { stage, .. } => *stage == CreateStage::Collaborators,
        }
    }
}

/// Result of a submit that did not hit a store error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Workspace),
    Blocked(BlockReason),
    /// Nobody is signed in; nothing was stored.
    NoSession,
}

/// Editable state of the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub permission: PermissionMode,
    pub collaborators: CollaboratorSet,
    pub submitting: bool,
}

impl FormState {
    /// Reason the submit button is disabled, if it is.
    pub fn blocked_reason(&self) -> Option<BlockReason> {
        if self.submitting {
            Some(BlockReason::InFlight)
        } else if self.title.trim().is_empty() {
            Some(BlockReason::EmptyTitle)
        } else if self.permission.is_shared() && self.collaborators.is_empty() {
            Some(BlockReason::NoCollaborators)
        } else {
            None
        }
    }
}

/// Services the flow talks to
pub struct CreatorDeps<S, N, R, A> {
    pub store: S,
    pub notifier: N,
    pub refresh: R,
    pub session: A,
}

struct Form {
    state: Mutex<FormState>,
    busy_tx: watch::Sender<bool>,
}

impl Form {
    fn set_submitting(&self, submitting: bool) {
        self.state.lock().submitting = submitting;
        self.busy_tx.send_replace(submitting);
    }
}

/// Clears `submitting` however the submit ends.
struct Busy<'a>(&'a Form);

impl Drop for Busy<'_> {
    fn drop(&mut self) {
        self.0.set_submitting(false);
    }
}

/// The "create workspace" flow. Clones share the same form.
pub struct WorkspaceCreator<S, N, R, A, G, C> {
    store: S,
    notifier: N,
    refresh: R,
    session: A,
    id_gen: G,
    clock: C,
    form: Arc<Form>,
}

impl<S, N, R, A, G, C> Clone for WorkspaceCreator<S, N, R, A, G, C>
where
    S: Clone,
    N: Clone,
    R: Clone,
    A: Clone,
    G: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            notifier: self.notifier.clone(),
            refresh: self.refresh.clone(),
            session: self.session.clone(),
            id_gen: self.id_gen.clone(),
            clock: self.clock.clone(),
            form: Arc::clone(&self.form),
        }
    }
}

impl<S, N, R, A, G, C> WorkspaceCreator<S, N, R, A, G, C>
where
    S: WorkspaceStore,
    N: NotifyAdapter,
    R: RefreshTrigger,
    A: SessionSource,
    G: IdGen,
    C: Clock,
{
    pub fn new(deps: CreatorDeps<S, N, R, A>, id_gen: G, clock: C) -> Self {
        let (busy_tx, _) = watch::channel(false);
        Self {
            store: deps.store,
            notifier: deps.notifier,
            refresh: deps.refresh,
            session: deps.session,
            id_gen,
            clock,
            form: Arc::new(Form { state: Mutex::new(FormState::default()), busy_tx }),
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.form.state.lock().title = title.into();
    }

    pub fn title(&self) -> String {
        self.form.state.lock().title.clone()
    }

    /// Switch mode. Leaving `Shared` keeps the selected collaborators so
    /// switching back restores them.
    pub fn set_permission(&self, permission: PermissionMode) {
        self.form.state.lock().permission = permission;
    }

    pub fn permission(&self) -> PermissionMode {
        self.form.state.lock().permission
    }

    /// Whether collaborator selection is active (only in shared mode).
    pub fn collaborators_active(&self) -> bool {
        self.permission().is_shared()
    }

    /// Select a collaborator. Returns false if one with the same ID is
    /// already selected.
    pub fn add_collaborator(&self, user: User) -> bool {
        self.form.state.lock().collaborators.insert(user)
    }

    /// Deselect the collaborator with `user`'s ID. Returns false if absent.
    pub fn remove_collaborator(&self, user: &User) -> bool {
        self.form.state.lock().collaborators.remove(&user.id)
    }

    pub fn collaborators(&self) -> Vec<User> {
        self.form.state.lock().collaborators.to_vec()
    }

    pub fn is_submitting(&self) -> bool {
        self.form.state.lock().submitting
    }

    /// Watch the submitting flag (e.g. to disable the button).
    pub fn subscribe_submitting(&self) -> watch::Receiver<bool> {
        self.form.busy_tx.subscribe()
    }

    pub fn blocked_reason(&self) -> Option<BlockReason> {
        self.form.state.lock().blocked_reason()
    }

    pub fn can_submit(&self) -> bool {
        self.blocked_reason().is_none()
    }

    pub fn snapshot(&self) -> FormState {
        self.form.state.lock().clone()
    }

    /// Search the directory for users to invite. Already-selected users and
    /// the signed-in user are left out.
    pub async fn search_collaborators<D: CollaboratorSearch>(
        &self,
        directory: &D,
        query: &str,
    ) -> Result<Vec<User>, SearchError> {
        let mut excluded = self.form.state.lock().collaborators.clone();
        // Excluded before the directory caps its results.
        if let Some(me) = self.session.current_user() {
            excluded.insert(User::new(me, String::new()));
        }
        directory.search(query, &excluded).await
    }

    /// Create the workspace from the current form.
    ///
    /// Returns `Blocked` without side effects when the form can't be
    /// submitted, and `NoSession` (no store calls, no toast) when nobody is
    /// signed in. On a store error a failure toast is shown and the error is
    /// returned. `submitting` is cleared on every path past the guard.
    pub async fn submit(&self) -> Result<SubmitOutcome, CreateError> {
        let (title, permission, collaborators) = {
            let mut state = self.form.state.lock();
            if let Some(reason) = state.blocked_reason() {
                tracing::debug!(%reason, "submit blocked");
                return Ok(SubmitOutcome::Blocked(reason));
            }
            state.submitting = true;
            (state.title.clone(), state.permission, state.collaborators.to_vec())
        };
        self.form.busy_tx.send_replace(true);
        let _busy = Busy(&self.form);

        let workspace_id = WorkspaceId::new(self.id_gen.next());
        let Some(owner) = self.session.current_user() else {
            tracing::warn!(%workspace_id, "no signed-in user, workspace not created");
            return Ok(SubmitOutcome::NoSession);
        };
        let workspace =
            Workspace::new(workspace_id, title, owner, permission, self.clock.epoch_ms());

        let span = tracing::info_span!(
            "workspace.create",
            workspace_id = %workspace.id,
            %permission,
            collaborators = collaborators.len(),
        );
        self.persist(workspace, collaborators).instrument(span).await
    }

    async fn persist(
        &self,
        workspace: Workspace,
        collaborators: Vec<User>,
    ) -> Result<SubmitOutcome, CreateError> {
        let start = std::time::Instant::now();

        if let Err(source) = self.store.create_workspace(&workspace).await {
            return Err(self.fail(CreateStage::Workspace, &workspace, source).await);
        }

        if workspace.permission.is_shared() && !collaborators.is_empty() {
            if let Err(source) = self.store.add_collaborators(&collaborators, &workspace.id).await
            {
                return Err(self.fail(CreateStage::Collaborators, &workspace, source).await);
            }
        }

        self.toast(SUCCESS_TITLE, SUCCESS_MESSAGE).await;
        self.refresh.refresh();

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!(owner = %workspace.owner, elapsed_ms, "workspace created");
        Ok(SubmitOutcome::Created(workspace))
    }

    async fn fail(
        &self,
        stage: CreateStage,
        workspace: &Workspace,
        source: StoreError,
    ) -> CreateError {
        tracing::error!(%stage, error = %source, "workspace creation failed");
        let error = CreateError::Store { stage, workspace_id: workspace.id.clone(), source };
        if error.workspace_created() {
            self.toast(FAILURE_TITLE, PARTIAL_FAILURE_MESSAGE).await;
            // The workspace exists, so the view should pick it up.
            self.refresh.refresh();
        } else {
            self.toast(FAILURE_TITLE, FAILURE_MESSAGE).await;
        }
        error
    }

    async fn toast(&self, title: &str, message: &str) {
        if let Err(e) = self.notifier.notify(title, message).await {
            tracing::warn!(%title, error = %e, "toast failed");
        }
    }
}

#[cfg(test)]
#[path = "creator_tests.rs"]
mod tests;
