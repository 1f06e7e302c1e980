//! Equipment Table Component
//!
//! Search box, the paginated table, and the pagination bar. All derivation
//! goes through the engine's pure projector; this component only owns the
//! transient list controls.

use leptos::prelude::*;

use inventory_sync::{project, EquipmentRecord, ListControls};

use crate::app::PAGE_SIZE;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn EquipmentTable(
    on_edit: Callback<EquipmentRecord>,
    on_delete: Callback<EquipmentRecord>,
) -> impl IntoView {
    let store = use_app_store();
    let controls = RwSignal::new(ListControls::default());

    let projection = Memo::new(move |_| {
        let c = controls.get();
        store
            .equipment()
            .with(|records| project(records, &c.query, c.page, PAGE_SIZE))
    });

    // A remote deletion can empty the current page; pull the page back in
    // range. Query changes already reset to page 1 via set_query.
    Effect::new(move |_| {
        let total_pages = projection.get().total_pages;
        let page = controls.with_untracked(|c| c.page);
        if total_pages > 0 && page > total_pages {
            controls.update(|c| c.clamp_to(total_pages));
        }
    });

    view! {
        <div class="equipment-panel">
            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by display name..."
                    prop:value=move || controls.get().query
                    on:input=move |ev| controls.update(|c| c.set_query(event_target_value(&ev)))
                />
                <Show when=move || !controls.get().query.is_empty()>
                    <button
                        class="clear-search"
                        title="Clear search"
                        on:click=move |_| controls.update(|c| c.set_query(""))
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <Show when=move || !controls.get().query.is_empty()>
                <p class="result-count">
                    {move || {
                        let found = projection.get().total_filtered;
                        let total = store.equipment().with(|records| records.len());
                        format!("Found {found} of {total} equipment")
                    }}
                </p>
            </Show>

            {move || {
                if store.loading().get() {
                    view! { <div class="placeholder">"Loading equipment..."</div> }.into_any()
                } else if store.equipment().with(|records| records.is_empty()) {
                    view! {
                        <div class="placeholder">
                            "No equipment found. Create your first entry to get started."
                        </div>
                    }
                        .into_any()
                } else if projection.get().total_filtered == 0 {
                    view! {
                        <div class="placeholder">
                            {move || {
                                format!(
                                    "No equipment found matching \"{}\"",
                                    controls.get().query,
                                )
                            }}
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="table-wrap">
                            <table class="equipment-table">
                                <thead>
                                    <tr>
                                        <th>"ID"</th>
                                        <th>"Display Name"</th>
                                        <th>"Condition"</th>
                                        <th>"Part Number"</th>
                                        <th>"Description"</th>
                                        <th class="actions-col">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || projection.get().page_items
                                        key=|record| record.id.clone()
                                        children=move |record| {
                                            let edit_record = record.clone();
                                            let delete_record = record.clone();
                                            view! {
                                                <tr>
                                                    <td class="mono">{record.id.clone()}</td>
                                                    <td>{record.display_name.clone()}</td>
                                                    <td>
                                                        <span class="condition-badge">
                                                            {record.condition.as_str()}
                                                        </span>
                                                    </td>
                                                    <td class="mono">{record.part_number.clone()}</td>
                                                    <td class="description-cell">
                                                        {record.description.clone()}
                                                    </td>
                                                    <td class="actions-cell">
                                                        <button
                                                            class="edit-btn"
                                                            on:click=move |_| on_edit.run(edit_record.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="delete-btn"
                                                            on:click=move |_| on_delete.run(delete_record.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || (projection.get().total_pages > 0)>
                <div class="pagination-bar">
                    <p class="range-line">
                        {move || {
                            let p = projection.get();
                            format!(
                                "Showing {} to {} of {}",
                                p.page_start + 1,
                                p.page_end,
                                p.total_filtered,
                            )
                        }}
                    </p>
                    <div class="page-controls">
                        <button
                            class="page-btn"
                            disabled=move || controls.get().page <= 1
                            on:click=move |_| {
                                controls.update(|c| c.set_page(c.page.saturating_sub(1)))
                            }
                        >
                            "Prev"
                        </button>
                        <For
                            each=move || {
                                page_slots(controls.get().page, projection.get().total_pages)
                            }
                            key=|slot| *slot
                            children=move |slot| {
                                match slot {
                                    PageSlot::Gap(_) => {
                                        view! { <span class="page-gap">"…"</span> }.into_any()
                                    }
                                    PageSlot::Page(page) => {
                                        view! {
                                            <button
                                                class=move || {
                                                    if controls.get().page == page {
                                                        "page-btn active"
                                                    } else {
                                                        "page-btn"
                                                    }
                                                }
                                                on:click=move |_| controls.update(|c| c.set_page(page))
                                            >
                                                {page}
                                            </button>
                                        }
                                            .into_any()
                                    }
                                }
                            }
                        />
                        <button
                            class="page-btn"
                            disabled=move || controls.get().page >= projection.get().total_pages
                            on:click=move |_| {
                                let total = projection.get().total_pages;
                                controls.update(|c| c.set_page((c.page + 1).min(total)))
                            }
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One rendered slot in the page-button row
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum PageSlot {
    Page(usize),
    /// Elided run of pages; the payload is the page before the gap, which
    /// keys the leading and trailing gaps apart
    Gap(usize),
}

/// Compact page-button layout: every page up to five pages, otherwise the
/// first and last page around a window centered on the current one.
fn page_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 5 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut pages = vec![1];
    let from = current.saturating_sub(1).max(2);
    let to = (current + 1).min(total - 1);
    pages.extend(from..=to);
    pages.push(total);
    pages.dedup();

    let mut slots = Vec::with_capacity(pages.len() + 2);
    let mut prev = 0;
    for page in pages {
        if prev != 0 && page > prev + 1 {
            slots.push(PageSlot::Gap(prev));
        }
        slots.push(PageSlot::Page(page));
        prev = page;
    }
    slots
}
