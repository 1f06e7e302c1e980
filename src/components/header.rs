//! Header Component
//!
//! Product title, admin identity, theme toggle, and logout.

use leptos::prelude::*;

use crate::context::{read_storage, write_storage, AuthContext, ADMIN_EMAIL};

const THEME_STORAGE_KEY: &str = "theme";

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let (is_dark, set_is_dark) = signal(false);

    // Pick up the persisted theme once on mount
    Effect::new(move |_| {
        let dark = read_storage(THEME_STORAGE_KEY).as_deref() == Some("dark");
        apply_theme(dark);
        set_is_dark.set(dark);
    });

    let toggle_theme = move |_| {
        let dark = !is_dark.get();
        apply_theme(dark);
        write_storage(THEME_STORAGE_KEY, if dark { "dark" } else { "light" });
        set_is_dark.set(dark);
    };

    view! {
        <header class="app-header">
            <h1 class="app-title">"PC200 CMS"</h1>
            <div class="admin-info">
                <span>"Admin: "</span>
                <span class="admin-email">{ADMIN_EMAIL}</span>
            </div>
            <div class="header-actions">
                <button
                    class="icon-btn"
                    title=move || {
                        if is_dark.get() { "Switch to light mode" } else { "Switch to dark mode" }
                    }
                    on:click=toggle_theme
                >
                    {move || if is_dark.get() { "☀" } else { "☾" }}
                </button>
                <button class="icon-btn" title="Logout" on:click=move |_| auth.logout()>
                    "⏻"
                </button>
            </div>
        </header>
    }
}

/// Theming is a class on the document element so the stylesheet can switch
/// its variables in one place.
fn apply_theme(dark: bool) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let _ = if dark {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
}
