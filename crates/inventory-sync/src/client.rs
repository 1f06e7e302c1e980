//! Remote Collection Contract
//!
//! Abstract interface to the realtime store. Implementations live outside
//! the engine: browser SDK bindings in the application, an in-memory double
//! in tests.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failure reported by a client implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct RemoteError(pub String);

/// Key/value pairs of one collection notification, in transport enumeration
/// order. Values are the raw per-record payloads.
pub type SnapshotMap = Vec<(String, Value)>;

/// Invoked with each collection payload; `None` means the path is absent
pub type ValueCallback = Box<dyn Fn(Option<SnapshotMap>)>;

/// Invoked on a transport-level subscription failure
pub type ErrorCallback = Box<dyn Fn(String)>;

/// Live-read handle; cancels the underlying listener exactly once
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Release the listener. Safe to call more than once; also runs on drop.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// Remote collection client consumed by the engine
///
/// Mutation paths address either a whole collection (`equipment`) or one
/// child node (`equipment/<id>`). Futures are `!Send`: everything runs on a
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait CollectionClient {
    /// Register a live listener on `path`. Every remote change re-delivers
    /// the whole collection payload to `on_value`; `on_error` reports a
    /// failed read. The listener stays registered until the returned
    /// [`Subscription`] is released.
    fn watch(
        &self,
        path: &str,
        on_value: ValueCallback,
        on_error: ErrorCallback,
    ) -> Subscription;

    /// Allocate a fresh child key under `path`.
    async fn push(&self, path: &str) -> Result<String, RemoteError>;

    /// Merge `value` into the node at `path`.
    async fn write(&self, path: &str, value: Value) -> Result<(), RemoteError>;

    /// Delete the node at `path`.
    async fn remove(&self, path: &str) -> Result<(), RemoteError>;
}
