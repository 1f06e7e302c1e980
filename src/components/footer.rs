//! Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>"© 2025 PT. Kreasi Kode Biner. All rights reserved."</p>
            <p class="footer-tagline">"Equipment Management System"</p>
        </footer>
    }
}
