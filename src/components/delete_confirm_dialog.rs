//! Delete Confirm Dialog
//!
//! Names the record before it goes. Deletion runs through the gateway; the
//! row disappears when the next snapshot no longer contains it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_sync::{EquipmentRecord, MutationGateway, SubmitState};

use crate::context::ToastContext;

#[component]
pub fn DeleteConfirmDialog(
    gateway: MutationGateway,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    record: ReadSignal<Option<EquipmentRecord>>,
    set_record: WriteSignal<Option<EquipmentRecord>>,
) -> impl IntoView {
    let toast = expect_context::<ToastContext>();
    let gateway = StoredValue::new_local(gateway);

    let (submit, set_submit) = signal(SubmitState::default());

    let on_confirm = move |_| {
        let Some(record) = record.get() else {
            return;
        };
        let mut state = submit.get();
        if !state.begin() {
            return;
        }
        set_submit.set(state);

        let gateway = gateway.get_value();
        spawn_local(async move {
            match gateway.delete(&record.id).await {
                Ok(()) => {
                    set_submit.update(|state| state.finish(true));
                    toast.success("Equipment deleted successfully");
                    set_open.set(false);
                    set_record.set(None);
                }
                Err(err) => {
                    set_submit.update(|state| state.finish(false));
                    web_sys::console::error_1(&err.to_string().into());
                    toast.error("Failed to delete equipment");
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog dialog-narrow">
                    <div class="dialog-header">
                        <h2>"Delete Equipment"</h2>
                        <p>
                            {move || {
                                format!(
                                    "This will permanently remove \"{}\" from the inventory.",
                                    record.get().map(|r| r.display_name).unwrap_or_default(),
                                )
                            }}
                        </p>
                    </div>
                    <div class="dialog-actions">
                        <button
                            type="button"
                            class="secondary-btn"
                            disabled=move || submit.get().in_flight()
                            on:click=move |_| set_open.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="danger-btn"
                            disabled=move || submit.get().in_flight()
                            on:click=on_confirm
                        >
                            {move || if submit.get().in_flight() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
