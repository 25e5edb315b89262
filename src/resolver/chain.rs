//! First-success evaluation over an ordered list of source candidates.
//!
//! Candidates are boxed futures awaited one at a time; a failing candidate
//! is logged and superseded by the next, never retried.

use futures_util::future::BoxFuture;
use tracing::debug;

use crate::error::SourceError;
use crate::models::indicator::{IndicatorKind, SourceTag};

pub struct Candidate<'a, T> {
    pub tag: SourceTag,
    pub fetch: BoxFuture<'a, Result<T, SourceError>>,
}

impl<'a, T> Candidate<'a, T> {
    pub fn new(tag: SourceTag, fetch: BoxFuture<'a, Result<T, SourceError>>) -> Self {
        Self { tag, fetch }
    }
}

/// Await candidates in order and return the first success together with the
/// tag of the source that produced it.
pub async fn first_success<T>(
    kind: IndicatorKind,
    candidates: Vec<Candidate<'_, T>>,
) -> Option<(SourceTag, T)> {
    for candidate in candidates {
        let tag = candidate.tag;
        match candidate.fetch.await {
            Ok(value) => return Some((tag, value)),
            Err(e) => debug!(
                indicator = kind.name(),
                source = %tag,
                error = %e,
                "candidate source failed, advancing chain"
            ),
        }
    }
    None
}
