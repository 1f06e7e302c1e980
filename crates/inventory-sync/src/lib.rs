//! Inventory Sync Engine
//!
//! Layered architecture:
//! - domain: Equipment entities and the error taxonomy
//! - client: Remote collection contract (watch/push/write/remove)
//! - sync: Local mirror fed by the live subscription
//! - projection: Pure filter + pagination over the mirror
//! - mutation: Validated create/update/delete against the remote store
//!
//! The engine never talks to a concrete transport. The application supplies a
//! [`CollectionClient`] (browser SDK bindings in production, an in-memory
//! double in tests) and trusts the subscription, not mutation return values,
//! for what is displayed.

mod client;
mod domain;
mod mutation;
mod projection;
mod sync;

mod tests;

pub use client::{
    CollectionClient, ErrorCallback, RemoteError, SnapshotMap, Subscription, ValueCallback,
};
pub use domain::{
    Condition, EquipmentDraft, EquipmentInput, EquipmentRecord, InventoryError, InventoryResult,
};
pub use mutation::{MutationGateway, SubmitState};
pub use projection::{project, ListControls, Projection};
pub use sync::{SyncEvent, SyncStore};
