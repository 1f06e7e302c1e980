//! Add Equipment Dialog
//!
//! Trigger button plus the modal create form. Submission is gated by the
//! engine's submit-state machine, so a double click cannot double-create.
//! The new row appears through the next snapshot, never from the create
//! response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_sync::{Condition, EquipmentDraft, InventoryError, MutationGateway, SubmitState};

use crate::context::ToastContext;

#[component]
pub fn AddEquipmentDialog(gateway: MutationGateway) -> impl IntoView {
    let toast = expect_context::<ToastContext>();
    let gateway = StoredValue::new_local(gateway);

    let (open, set_open) = signal(false);
    let (submit, set_submit) = signal(SubmitState::default());
    let (display_name, set_display_name) = signal(String::new());
    let (condition, set_condition) = signal(String::new());
    let (part_number, set_part_number) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let reset_form = move || {
        set_display_name.set(String::new());
        set_condition.set(String::new());
        set_part_number.set(String::new());
        set_description.set(String::new());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
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
            match gateway.create(&draft).await {
                Ok(_) => {
                    set_submit.update(|state| state.finish(true));
                    toast.success("Equipment added successfully");
                    reset_form();
                    set_open.set(false);
                }
                Err(InventoryError::Validation(_)) => {
                    set_submit.update(|state| state.finish(false));
                    toast.error("Please fill in all required fields");
                }
                Err(err) => {
                    set_submit.update(|state| state.finish(false));
                    web_sys::console::error_1(&err.to_string().into());
                    toast.error("Failed to add equipment");
                }
            }
        });
    };

    view! {
        <button class="primary-btn" on:click=move |_| set_open.set(true)>"+ Add Equipment"</button>
        <Show when=move || open.get()>
            <div class="dialog-overlay">
                <div class="dialog">
                    <div class="dialog-header">
                        <h2>"Add New Equipment"</h2>
                        <p>"Fill in the details to add a new equipment to your inventory"</p>
                    </div>
                    <form class="dialog-form" on:submit=on_submit>
                        <label for="add-display-name">"Display Name *"</label>
                        <input
                            id="add-display-name"
                            type="text"
                            placeholder="e.g., Attachment"
                            prop:value=move || display_name.get()
                            on:input=move |ev| set_display_name.set(event_target_value(&ev))
                        />

                        <label for="add-condition">"Condition *"</label>
                        <select
                            id="add-condition"
                            prop:value=move || condition.get()
                            on:change=move |ev| set_condition.set(event_target_value(&ev))
                        >
                            <option value="">"Select a condition"</option>
                            {Condition::ALL
                                .iter()
                                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                                .collect_view()}
                        </select>

                        <label for="add-part-number">"Part Number *"</label>
                        <input
                            id="add-part-number"
                            type="text"
                            placeholder="e.g., TR-ATT-001"
                            prop:value=move || part_number.get()
                            on:input=move |ev| set_part_number.set(event_target_value(&ev))
                        />

                        <label for="add-description">"Description"</label>
                        <textarea
                            id="add-description"
                            rows=3
                            placeholder="Enter equipment description"
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
                                    if submit.get().in_flight() { "Saving..." } else { "Save Equipment" }
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
