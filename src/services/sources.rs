//! Source interfaces consumed by the indicator resolver.
//!
//! The resolver only ever sees these traits; concrete clients (FRED, Data
//! Link, multpl.com) live next door and tests substitute mocks.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::models::observation::RawSeries;

#[async_trait]
pub trait TimeSeriesSource: Send + Sync {
    /// Latest `limit` observations for a series, newest first.
    async fn fetch_series(&self, series_id: &str, limit: usize) -> Result<RawSeries, SourceError>;
}

#[async_trait]
pub trait ValuationPageSource: Send + Sync {
    /// Single numeric field scraped from the page body.
    async fn fetch_current(&self) -> Result<f64, SourceError>;

    /// Latest value from the page's table export.
    async fn fetch_table_latest(&self) -> Result<f64, SourceError>;
}
