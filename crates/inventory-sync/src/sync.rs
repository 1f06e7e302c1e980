//! Sync Store
//!
//! Owns the live subscription and converts each notification into a full
//! replacement snapshot. The subscription, not any mutation return value, is
//! the single source of truth for what the UI shows; replacing the mirror
//! wholesale keeps it from ever diverging from the remote collection, at the
//! cost of rescanning the payload on every notification. Fine for tens to
//! low thousands of records, a known boundary for anything larger.

use log::{error, warn};

use crate::client::{CollectionClient, SnapshotMap, Subscription};
use crate::domain::{EquipmentInput, EquipmentRecord, InventoryError};

/// One subscription delivery
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    /// Full replacement of the local mirror
    Snapshot(Vec<EquipmentRecord>),
    /// The live read failed; the mirror is stale until re-attach
    Lost(InventoryError),
}

/// Live mirror of one remote collection
///
/// Holds exactly one watch per attach. Dropping the store (or calling
/// [`SyncStore::detach`]) releases the listener, after which no further
/// events are delivered.
pub struct SyncStore {
    subscription: Subscription,
}

impl SyncStore {
    /// Attach a live watch on `path`; events flow into `on_event` until the
    /// returned store is detached or dropped.
    ///
    /// Subscription failures are reported, not retried: the operator reloads
    /// to re-establish the live read.
    pub fn attach(
        client: &dyn CollectionClient,
        path: &str,
        on_event: impl Fn(SyncEvent) + Clone + 'static,
    ) -> Self {
        let on_error = {
            let on_event = on_event.clone();
            move |message: String| {
                error!("live read failed: {message}");
                on_event(SyncEvent::Lost(InventoryError::Subscription(message)));
            }
        };
        let subscription = client.watch(
            path,
            Box::new(move |payload| on_event(SyncEvent::Snapshot(decode_snapshot(payload)))),
            Box::new(on_error),
        );
        Self { subscription }
    }

    /// Release the watch. Idempotent; also runs on drop.
    pub fn detach(&mut self) {
        self.subscription.unsubscribe();
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_active()
    }
}

/// Convert one notification payload into an ordered snapshot.
///
/// An absent or empty collection is an empty snapshot, not an error. Entry
/// order is the transport's key enumeration order; entries that fail to
/// decode are dropped individually so one corrupt row cannot blank the list.
pub(crate) fn decode_snapshot(payload: Option<SnapshotMap>) -> Vec<EquipmentRecord> {
    let Some(entries) = payload else {
        return Vec::new();
    };
    let mut records = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        match serde_json::from_value::<EquipmentInput>(value) {
            Ok(input) => records.push(EquipmentRecord::from_entry(key, input)),
            Err(err) => warn!("dropping malformed equipment entry {key}: {err}"),
        }
    }
    records
}
