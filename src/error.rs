// src/error.rs
//! Failure taxonomy for the enhancement and portfolio contracts.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Required input fields are missing. Raised before any outbound call.
    #[error("Missing required fields: {0}")]
    Validation(String),

    /// The enhancement provider failed or was unreachable.
    #[error("{0}")]
    Upstream(String),

    /// The outbound call exceeded its time ceiling.
    #[error("Enhancement provider timed out")]
    Timeout,

    /// The provider replied, but no parseable JSON object was found.
    /// The raw reply is retained for diagnostics.
    #[error("Model returned invalid format")]
    ModelFormat { raw: String },
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage slot rejected the write, typically because
    /// the host's quota is exhausted.
    #[error("Portfolio storage write failed: {0}")]
    Quota(String),

    /// The slot exists but could not be read, so rewriting it would drop
    /// every prior snapshot. Distinct from unparseable contents, which
    /// degrade to an empty store.
    #[error("Portfolio storage read failed: {0}")]
    Unavailable(String),
}
