//! Nasdaq Data Link dataset client, used as the secondary valuation series.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::SourceError;
use crate::models::observation::{RawObservation, RawSeries};
use crate::services::sources::TimeSeriesSource;

pub const DATALINK_BASE_URL: &str = "https://data.nasdaq.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct DatasetResponse {
    dataset: Dataset,
}

#[derive(Debug, Deserialize)]
struct Dataset {
    /// Rows are [date, value] pairs, newest first.
    #[serde(default)]
    data: Vec<(String, f64)>,
}

pub struct DatalinkClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl DatalinkClient {
    pub fn new() -> Self {
        Self::with_base_url(DATALINK_BASE_URL, None, reqwest::Client::new())
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: Option<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }
}

impl Default for DatalinkClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimeSeriesSource for DatalinkClient {
    async fn fetch_series(&self, series_id: &str, limit: usize) -> Result<RawSeries, SourceError> {
        let url = format!("{}/api/v3/datasets/{}.json", self.base_url, series_id);
        let mut request = self
            .client
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .timeout(REQUEST_TIMEOUT);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(format!(
                "Data Link returned HTTP {} for {}",
                status, series_id
            )));
        }

        let body: DatasetResponse = response
            .json()
            .await
            .map_err(|e| SourceError::malformed(format!("Data Link JSON decode: {}", e)))?;

        debug!(
            dataset = series_id,
            rows = body.dataset.data.len(),
            "fetched {} rows for {}",
            body.dataset.data.len(),
            series_id
        );

        let observations = body
            .dataset
            .data
            .into_iter()
            .map(|(date, value)| RawObservation {
                date,
                value: value.to_string(),
            })
            .collect();

        Ok(RawSeries::new(series_id, observations))
    }
}
