//! Toaster Component
//!
//! Renders the active toast stack from the toast context.

use leptos::prelude::*;

use crate::context::{ToastContext, ToastKind};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = expect_context::<ToastContext>();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
