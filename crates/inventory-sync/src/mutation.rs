//! Mutation Gateway
//!
//! Validated create/update/delete against the remote collection. Mutations
//! never touch the local mirror: a successful write becomes visible only
//! when the Sync Store delivers the next snapshot, so there is no optimistic
//! state to roll back on failure.

use std::rc::Rc;

use log::debug;

use crate::client::{CollectionClient, RemoteError};
use crate::domain::{EquipmentDraft, InventoryError, InventoryResult};

/// Issues mutations against one collection path
#[derive(Clone)]
pub struct MutationGateway {
    client: Rc<dyn CollectionClient>,
    path: String,
}

impl MutationGateway {
    pub fn new(client: Rc<dyn CollectionClient>, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Validate and create a new record; returns the remote-assigned key.
    ///
    /// Validation failures are caught before any network call is made.
    pub async fn create(&self, draft: &EquipmentDraft) -> InventoryResult<String> {
        let input = draft.validate()?;
        let key = self.client.push(&self.path).await.map_err(remote)?;
        let value = serde_json::to_value(&input)
            .map_err(|err| InventoryError::RemoteWrite(err.to_string()))?;
        self.client
            .write(&format!("{}/{}", self.path, key), value)
            .await
            .map_err(remote)?;
        debug!("created equipment {key}");
        Ok(key)
    }

    /// Validate and merge the full field set into an existing record.
    ///
    /// If the id vanished upstream but the store still acks the write, no
    /// synthetic error is raised here; the next snapshot is the arbiter of
    /// what exists.
    pub async fn update(&self, id: &str, draft: &EquipmentDraft) -> InventoryResult<()> {
        let input = draft.validate()?;
        let value = serde_json::to_value(&input)
            .map_err(|err| InventoryError::RemoteWrite(err.to_string()))?;
        self.client
            .write(&format!("{}/{}", self.path, id), value)
            .await
            .map_err(remote)?;
        debug!("updated equipment {id}");
        Ok(())
    }

    /// Delete a record by id. No field validation applies.
    pub async fn delete(&self, id: &str) -> InventoryResult<()> {
        self.client
            .remove(&format!("{}/{}", self.path, id))
            .await
            .map_err(remote)?;
        debug!("deleted equipment {id}");
        Ok(())
    }
}

fn remote(err: RemoteError) -> InventoryError {
    InventoryError::RemoteWrite(err.0)
}

/// Per-dialog submission lifecycle
///
/// `Idle → Submitting → (Succeeded | Failed)`; both end states are terminal
/// until the next [`SubmitState::begin`], which re-enters `Submitting`.
/// While `Submitting`, `begin` refuses re-entry; that is the only concurrency
/// discipline a dialog needs, since the subscription owns the visible state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    /// Enter `Submitting` unless a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    /// Land in a terminal state.
    pub fn finish(&mut self, ok: bool) {
        *self = if ok {
            SubmitState::Succeeded
        } else {
            SubmitState::Failed
        };
    }

    pub fn in_flight(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}
