//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The equipment
//! list is written by exactly one place: the dashboard's subscription
//! handler.

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_sync::EquipmentRecord;

/// Dashboard state fed by the live subscription
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local mirror of the remote equipment collection
    pub equipment: Vec<EquipmentRecord>,
    /// True until the first snapshot (or a subscription failure) arrives
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
