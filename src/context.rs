//! Application Context
//!
//! Shared state provided via Leptos Context API: the admin auth gate and the
//! toast queue.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Fixed admin credential pair (single-operator tool, no token issuance)
pub const ADMIN_EMAIL: &str = "admin@gmail.com";
const ADMIN_PASSWORD: &str = "admin123";

/// localStorage key remembering the gate across reloads
const AUTH_STORAGE_KEY: &str = "admin_authenticated";

/// How long a toast stays on screen
const TOAST_MILLIS: u32 = 3500;

/// Admin authentication gate
///
/// An explicit context object rather than a process-wide flag: restored from
/// persistent storage at startup, flipped only by login/logout.
#[derive(Clone, Copy)]
pub struct AuthContext {
    is_authenticated: ReadSignal<bool>,
    set_is_authenticated: WriteSignal<bool>,
}

impl AuthContext {
    pub fn new() -> Self {
        let stored = read_storage(AUTH_STORAGE_KEY).as_deref() == Some("true");
        let (is_authenticated, set_is_authenticated) = signal(stored);
        Self {
            is_authenticated,
            set_is_authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// Check the fixed credential pair; a success is remembered across reloads.
    pub fn login(&self, email: &str, password: &str) -> bool {
        let ok = email == ADMIN_EMAIL && password == ADMIN_PASSWORD;
        if ok {
            self.set_is_authenticated.set(true);
            write_storage(AUTH_STORAGE_KEY, "true");
        }
        ok
    }

    pub fn logout(&self) {
        self.set_is_authenticated.set(false);
        remove_storage(AUTH_STORAGE_KEY);
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Transient notification queue; every failure path ends up here
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> RwSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message.into());
    }

    fn show(&self, kind: ToastKind, message: String) {
        let id = self.next_id.with_value(|id| *id);
        self.next_id.update_value(|next| *next += 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

// ========================
// Persistent storage helpers
// ========================

pub fn read_storage(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write_storage(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove_storage(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
