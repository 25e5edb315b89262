//! FRED series-observations client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::SourceError;
use crate::models::observation::{RawObservation, RawSeries};
use crate::services::sources::TimeSeriesSource;

pub const FRED_BASE_URL: &str = "https://api.stlouisfed.org";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    #[serde(default)]
    observations: Vec<RawObservation>,
}

pub struct FredClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FredClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(FRED_BASE_URL, api_key, reqwest::Client::new())
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TimeSeriesSource for FredClient {
    async fn fetch_series(&self, series_id: &str, limit: usize) -> Result<RawSeries, SourceError> {
        let url = format!("{}/fred/series/observations", self.base_url);
        let limit = limit.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("limit", limit.as_str()),
                ("sort_order", "desc"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(format!(
                "FRED returned HTTP {} for {}",
                status, series_id
            )));
        }

        let body: ObservationsResponse = response
            .json()
            .await
            .map_err(|e| SourceError::malformed(format!("FRED JSON decode: {}", e)))?;

        debug!(
            series = series_id,
            count = body.observations.len(),
            "fetched {} observations for {}",
            body.observations.len(),
            series_id
        );

        Ok(RawSeries::new(series_id, body.observations))
    }
}
