//! Error types for fetch tracking.
//!
//! The [`crate::context::FetchContext`] surface itself is total: no notify
//! or query operation can fail into the store's fetch path. Errors exist
//! only at the diagnostics boundary, when exporting recorded state.

use thiserror::Error;

/// Snapshot export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize fetch counts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write fetch counts: {0}")]
    Io(#[from] std::io::Error),
}
