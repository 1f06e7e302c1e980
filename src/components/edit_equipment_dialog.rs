//! Edit Equipment Dialog
//!
//! Modal form prefilled from the selected record; the id is shown read-only
//! because keys are remote-assigned and immutable. Submits a full-field
//! merge update; the visible row changes when the next snapshot lands.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_sync::{
    Condition, EquipmentDraft, EquipmentRecord, InventoryError, MutationGateway, SubmitState,
};

use crate::context::ToastContext;

#[component]
pub fn EditEquipmentDialog(
    gateway: MutationGateway,
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    record: ReadSignal<Option<EquipmentRecord>>,
) -> impl IntoView {
    let toast = expect_context::<ToastContext>();
    let gateway = StoredValue::new_local(gateway);

    let (submit, set_submit) = signal(SubmitState::default());
    let (display_name, set_display_name) = signal(String::new());
    let (condition, set_condition) = signal(String::new());
    let (part_number, set_part_number) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Re-prefill whenever a different record is selected
    Effect::new(move |_| {
        if let Some(record) = record.get() {
            let draft = EquipmentDraft::from_record(&record);
            set_display_name.set(draft.display_name);
            set_condition.set(draft.condition);
            set_part_number.set(draft.part_number);
            set_description.set(draft.description);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = record.get().map(|record| record.id) else {
            return;
        };
        let mut state = submit.get();
        if !state.begin() {
            return;
        }
        set_submit.set(state);

        let draft = EquipmentDraft {
            display_name: display_name.get(),
            condition: condition.get(),
            part_number: part_number.get(),
            description: description.get(),
        };
        let gateway = gateway.get_value();
        spawn_local(async move {
            match gateway.update(&id, &draft).await {
                Ok(()) => {
                    set_submit.update(|state| state.finish(true));
                    toast.success("Equipment updated successfully");
                    set_open.set(false);
                }
                Err(InventoryError::Validation(_)) => {
                    set_submit.update(|state| state.finish(false));
                    toast.error("Please fill in all required fields");
                }
                Err(err) => {
                    set_submit.update(|state| state.finish(false));
                    web_sys::console::error_1(&err.to_string().into());
                    toast.error("Failed to update equipment");
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <div class="dialog-header">
                        <h2>"Edit Equipment"</h2>
                        <p>"Update the equipment details below"</p>
                    </div>
                    <form class="dialog-form" on:submit=on_submit>
                        <label for="edit-id">"ID (Read-only)"</label>
                        <input
                            id="edit-id"
                            type="text"
                            class="readonly-input"
                            prop:value=move || {
                                record.get().map(|record| record.id).unwrap_or_default()
                            }
                            disabled=true
                        />

                        <label for="edit-display-name">"Display Name *"</label>
                        <input
                            id="edit-display-name"
                            type="text"
                            prop:value=move || display_name.get()
                            on:input=move |ev| set_display_name.set(event_target_value(&ev))
                        />

                        <label for="edit-condition">"Condition *"</label>
                        <select
                            id="edit-condition"
                            prop:value=move || condition.get()
                            on:change=move |ev| set_condition.set(event_target_value(&ev))
                        >
                            <option value="">"Select a condition"</option>
                            {Condition::ALL
                                .iter()
                                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                                .collect_view()}
                        </select>

                        <label for="edit-part-number">"Part Number *"</label>
                        <input
                            id="edit-part-number"
                            type="text"
                            prop:value=move || part_number.get()
                            on:input=move |ev| set_part_number.set(event_target_value(&ev))
                        />

                        <label for="edit-description">"Description"</label>
                        <textarea
                            id="edit-description"
                            rows=3
                            prop:value=move || description.get()
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        ></textarea>

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
                                type="submit"
                                class="primary-btn"
                                disabled=move || submit.get().in_flight()
                            >
                                {move || {
                                    if submit.get().in_flight() { "Saving..." } else { "Save Changes" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
