//! Login Page Component
//!
//! Fixed-credential admin gate in front of the dashboard.

use leptos::prelude::*;

use crate::context::{AuthContext, ToastContext};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let toast = expect_context::<ToastContext>();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            toast.error("Please fill in all fields");
            return;
        }
        if auth.login(&email, &password) {
            toast.success("Login successful");
        } else {
            toast.error("Invalid email or password");
        }
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <h1>"PC200 CMS"</h1>
                <p class="login-hint">"Sign in to manage the equipment inventory"</p>
                <form class="login-form" on:submit=on_submit>
                    <label for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        type="email"
                        placeholder="admin@gmail.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn">"Sign In"</button>
                </form>
            </div>
        </div>
    }
}
