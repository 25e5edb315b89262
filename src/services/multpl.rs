//! multpl.com valuation scraper: the current-value field on the Shiller P/E
//! page, plus the monthly table as a second export format.

use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

use crate::error::SourceError;
use crate::services::sources::ValuationPageSource;

pub const MULTPL_BASE_URL: &str = "https://www.multpl.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

fn current_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"id="current-value"[^>]*>\s*([\d.]+)"#).expect("static pattern")
    })
}

fn table_row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<td class="left">[^<]+</td>\s*<td class="right">\s*([\d.]+)"#)
            .expect("static pattern")
    })
}

pub struct MultplClient {
    client: reqwest::Client,
    base_url: String,
}

impl MultplClient {
    pub fn new() -> Self {
        Self::with_base_url(MULTPL_BASE_URL, reqwest::Client::new())
    }

    pub fn with_base_url(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_field(&self, path: &str, pattern: &Regex) -> Result<f64, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(format!(
                "multpl returned HTTP {} for {}",
                status, path
            )));
        }

        let body = response.text().await?;
        let captures = pattern
            .captures(&body)
            .ok_or_else(|| SourceError::malformed(format!("no match on {}", path)))?;
        let value = captures[1]
            .parse::<f64>()
            .map_err(|_| SourceError::malformed(format!("non-numeric field on {}", path)))?;

        debug!(path = path, value = value, "scraped {} from {}", value, path);
        Ok(value)
    }
}

impl Default for MultplClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ValuationPageSource for MultplClient {
    async fn fetch_current(&self) -> Result<f64, SourceError> {
        self.fetch_field("/shiller-pe", current_value_re()).await
    }

    async fn fetch_table_latest(&self) -> Result<f64, SourceError> {
        self.fetch_field("/shiller-pe/table/by-month", table_row_re())
            .await
    }
}
