//! Error taxonomy for external data sources.
//!
//! A `SourceError` means one candidate source failed; the resolver recovers
//! locally by advancing the fallback chain. An indicator with no surviving
//! candidate is surfaced as `None` in the resolved set, never as an error
//! that aborts the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// Required credentials are absent; the source is skipped without a
    /// network call.
    #[error("source not configured")]
    NotConfigured,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(String),

    /// The source answered but produced no usable observation after
    /// sentinel filtering.
    #[error("no usable observations")]
    Empty,

    /// Parsed fine, but the value is outside the documented sanity range
    /// and the source is treated as failed.
    #[error("value {value} outside sanity range ({low}, {high})")]
    OutOfRange { value: f64, low: f64, high: f64 },
}

impl SourceError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
