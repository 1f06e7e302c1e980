//! Realtime Database Bindings
//!
//! Frontend implementation of the engine's `CollectionClient` over the shim
//! exposed by `index.html` (`window.__EQUIP_DB__`), which wraps the Firebase
//! Realtime Database SDK: a value listener per path plus promise-based
//! writes.

use async_trait::async_trait;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use inventory_sync::{
    CollectionClient, ErrorCallback, RemoteError, SnapshotMap, Subscription, ValueCallback,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__EQUIP_DB__"], js_name = watch)]
    fn db_watch(path: &str, on_value: &Function, on_error: &Function) -> Function;

    #[wasm_bindgen(js_namespace = ["window", "__EQUIP_DB__"], js_name = push, catch)]
    async fn db_push(path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__EQUIP_DB__"], js_name = write, catch)]
    async fn db_write(path: &str, value: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__EQUIP_DB__"], js_name = remove, catch)]
    async fn db_remove(path: &str) -> Result<JsValue, JsValue>;
}

/// Database client backed by the browser SDK
#[derive(Default)]
pub struct FirebaseClient;

impl FirebaseClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl CollectionClient for FirebaseClient {
    fn watch(&self, path: &str, on_value: ValueCallback, on_error: ErrorCallback) -> Subscription {
        let on_value = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            on_value(decode_payload(payload));
        });
        let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
            on_error(js_error_message(&err));
        });

        let unsubscribe = db_watch(
            path,
            on_value.as_ref().unchecked_ref(),
            on_error.as_ref().unchecked_ref(),
        );

        // the closures must outlive the SDK listener; releasing the
        // subscription drops them together with the JS-side registration
        Subscription::new(move || {
            let _ = unsubscribe.call0(&JsValue::NULL);
            drop(on_value);
            drop(on_error);
        })
    }

    async fn push(&self, path: &str) -> Result<String, RemoteError> {
        let key = db_push(path).await.map_err(remote_error)?;
        key.as_string()
            .ok_or_else(|| RemoteError("push returned a non-string key".into()))
    }

    async fn write(&self, path: &str, value: serde_json::Value) -> Result<(), RemoteError> {
        let js_value =
            serde_wasm_bindgen::to_value(&value).map_err(|err| RemoteError(err.to_string()))?;
        db_write(path, js_value).await.map_err(remote_error)?;
        Ok(())
    }

    async fn remove(&self, path: &str) -> Result<(), RemoteError> {
        db_remove(path).await.map_err(remote_error)?;
        Ok(())
    }
}

/// Convert a raw snapshot value into ordered key/value pairs.
///
/// JS object key enumeration order is exactly the order the engine sees.
fn decode_payload(payload: JsValue) -> Option<SnapshotMap> {
    if payload.is_null() || payload.is_undefined() {
        return None;
    }
    let object = js_sys::Object::from(payload);
    let mut entries: SnapshotMap = Vec::new();
    for entry in js_sys::Object::entries(&object).iter() {
        let pair = js_sys::Array::from(&entry);
        let Some(key) = pair.get(0).as_string() else {
            continue;
        };
        let value =
            serde_wasm_bindgen::from_value(pair.get(1)).unwrap_or(serde_json::Value::Null);
        entries.push((key, value));
    }
    Some(entries)
}

fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{err:?}"))
}

fn remote_error(err: JsValue) -> RemoteError {
    RemoteError(js_error_message(&err))
}
