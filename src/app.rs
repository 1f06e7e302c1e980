//! Application Root
//!
//! Provides the auth, database, and toast contexts, then gates the dashboard
//! behind the login page.

use leptos::prelude::*;

use crate::components::{Dashboard, LoginPage, Toaster};
use crate::context::{AuthContext, ToastContext};

/// Canonical collection path: the remote tree node holding every record
pub const EQUIPMENT_PATH: &str = "equipment";

/// Rows per dashboard page
pub const PAGE_SIZE: usize = 10;

#[component]
pub fn App() -> impl IntoView {
    let auth = AuthContext::new();
    provide_context(auth);
    provide_context(ToastContext::new());

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <Dashboard />
        </Show>
        <Toaster />
    }
}
