//! Telegram Bot API delivery.

use std::time::Duration;
use tracing::info;

use crate::error::SourceError;

pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

/// Telegram caps messages at 4096 characters; reports longer than this are
/// split into a summary part and an analysis part before sending.
pub const MESSAGE_SPLIT_THRESHOLD: usize = 4000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct TelegramClient {
    client: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    pub fn new(token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(TELEGRAM_BASE_URL, token, chat_id, reqwest::Client::new())
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<(), SourceError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .client
            .post(&url)
            .form(&[
                ("chat_id", self.chat_id.as_str()),
                ("text", text),
                ("parse_mode", "HTML"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::malformed(format!(
                "Telegram returned HTTP {}: {}",
                status, body
            )));
        }

        info!(chars = text.chars().count(), "message delivered to Telegram");
        Ok(())
    }
}
