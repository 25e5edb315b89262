//! Raw time-series observations as returned by external sources.

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Sentinel used by the series API for dates with no published value.
pub const MISSING_SENTINEL: &str = ".";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawObservation {
    pub date: String,
    pub value: String,
}

/// One fetch's worth of observations from a named series, newest first.
/// Ephemeral: exists only between a fetch and its resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSeries {
    pub series_id: String,
    pub observations: Vec<RawObservation>,
}

impl RawSeries {
    pub fn new(series_id: impl Into<String>, observations: Vec<RawObservation>) -> Self {
        Self {
            series_id: series_id.into(),
            observations,
        }
    }

    /// Numeric values, newest first, with missing-sentinel entries filtered
    /// out. Any remaining value that does not parse as a single decimal
    /// number fails the whole source. An all-sentinel or empty series fails
    /// with `SourceError::Empty`.
    pub fn numeric_values(&self) -> Result<Vec<f64>, SourceError> {
        let mut values = Vec::with_capacity(self.observations.len());
        for obs in &self.observations {
            if obs.value == MISSING_SENTINEL {
                continue;
            }
            let parsed = obs.value.trim().parse::<f64>().map_err(|_| {
                SourceError::malformed(format!(
                    "series {}: non-numeric value {:?}",
                    self.series_id, obs.value
                ))
            })?;
            values.push(parsed);
        }
        if values.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(values)
    }
}
