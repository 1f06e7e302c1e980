//! Error Taxonomy
//!
//! Three failure classes, all recovered at the UI boundary: validation fails
//! before any network call, writes can fail upstream, and the live read can
//! be lost. Nothing here is fatal to the process.

use thiserror::Error;

/// Common result type for engine operations
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Engine-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// A required field is missing or unparseable; no request was issued
    #[error("validation failed: {0}")]
    Validation(String),

    /// A create/update/delete was rejected upstream
    #[error("remote write failed: {0}")]
    RemoteWrite(String),

    /// The live read failed; the mirror is stale until the operator reloads
    #[error("subscription failed: {0}")]
    Subscription(String),
}
