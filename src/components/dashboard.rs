//! Dashboard Component
//!
//! Owns the live subscription for the lifetime of the mount, plus the
//! selected record and the open/closed state of the three dialogs. Every
//! remote change flows in through the subscription handler; mutation results
//! never touch the store directly.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use inventory_sync::{CollectionClient, EquipmentRecord, MutationGateway, SyncEvent, SyncStore};

use crate::app::EQUIPMENT_PATH;
use crate::components::{
    AddEquipmentDialog, DeleteConfirmDialog, EditEquipmentDialog, EquipmentTable, Footer, Header,
};
use crate::context::ToastContext;
use crate::firebase::FirebaseClient;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let toast = expect_context::<ToastContext>();
    let client: Rc<dyn CollectionClient> = Rc::new(FirebaseClient::new());

    let store = Store::new(AppState::new());
    provide_context(store);

    let (selected, set_selected) = signal::<Option<EquipmentRecord>>(None);
    let (edit_open, set_edit_open) = signal(false);
    let (delete_open, set_delete_open) = signal(false);

    // One live watch per mount; released again when the dashboard unmounts.
    let sync = SyncStore::attach(client.as_ref(), EQUIPMENT_PATH, move |event| match event {
        SyncEvent::Snapshot(records) => {
            web_sys::console::log_1(
                &format!("[SYNC] snapshot with {} records", records.len()).into(),
            );
            store.equipment().set(records);
            store.loading().set(false);
        }
        SyncEvent::Lost(err) => {
            web_sys::console::error_1(&err.to_string().into());
            toast.error("Failed to load equipment from database");
            store.loading().set(false);
        }
    });
    let sync = StoredValue::new_local(sync);
    on_cleanup(move || sync.update_value(|sync| sync.detach()));

    let gateway = MutationGateway::new(client, EQUIPMENT_PATH);

    let on_edit = Callback::new(move |record: EquipmentRecord| {
        set_selected.set(Some(record));
        set_edit_open.set(true);
    });
    let on_delete = Callback::new(move |record: EquipmentRecord| {
        set_selected.set(Some(record));
        set_delete_open.set(true);
    });

    view! {
        <div class="dashboard">
            <Header />
            <main class="dashboard-main">
                <div class="dashboard-heading">
                    <div>
                        <h1>"PC200 CMS"</h1>
                        <p class="dashboard-subtitle">"Manage your equipment and parts inventory"</p>
                    </div>
                    <AddEquipmentDialog gateway=gateway.clone() />
                </div>
                <EquipmentTable on_edit=on_edit on_delete=on_delete />
            </main>
            <Footer />
            <EditEquipmentDialog
                gateway=gateway.clone()
                open=edit_open
                set_open=set_edit_open
                record=selected
            />
            <DeleteConfirmDialog
                gateway=gateway
                open=delete_open
                set_open=set_delete_open
                record=selected
                set_record=set_selected
            />
        </div>
    }
}
