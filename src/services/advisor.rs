//! Hosted-LLM monthly analysis via an OpenAI-compatible chat endpoint.
//!
//! Failure here never aborts the run; the caller substitutes
//! [`FALLBACK_ANALYSIS`] and delivers the report without narrative.

use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::error::SourceError;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai";

pub const FALLBACK_ANALYSIS: &str =
    "Automated analysis is unavailable this month. Review the indicator \
     summary and the source links directly.";

const MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = "You are an investment researcher with fifteen \
     years of experience in macro analysis and cycle theory. You are concise, \
     direct, and only state what the data supports.";

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Four-part monthly review prompt over the indicator lines.
pub fn build_prompt(period_label: &str, indicator_lines: &[String]) -> String {
    format!(
        "Based on the following {period} market indicators, write the full \
         monthly review.\n\n\
         [Five indicators]\n{lines}\n\n\
         Cover four parts, in order:\n\n\
         **Part 1: the verdict.** Is this a green light (hold comfortably), \
         a yellow light (wait and see), or a red light (defensive)? One \
         sentence of reasoning.\n\n\
         **Part 2: cycle position.** Where are we in the Kostolany egg?\n\
         - Position 1: bottom (rates peaked, money tightest, pessimism deepest)\n\
         - Position 2: recovery leg (rates starting down, equities grinding up)\n\
         - Position 3: top (liquidity everywhere, everyone in the market)\n\
         - Position 4: decline leg (rates rising, equities falling)\n\
         Explain why this position and what it implies.\n\n\
         **Part 3: concrete actions** for a long-term holder of broad index \
         ETFs: continue, pause, or add to the monthly plan? Any allocation \
         changes? Anything specific to watch?\n\n\
         **Part 4: next month.** List 3-4 indicators or events most worth \
         tracking.\n\n\
         Be direct, plain language, under 400 words, no filler.",
        period = period_label,
        lines = indicator_lines.join("\n"),
    )
}

pub struct AdvisorClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AdvisorClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(GROQ_BASE_URL, api_key, reqwest::Client::new())
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

    pub async fn analyze(
        &self,
        period_label: &str,
        indicator_lines: &[String],
    ) -> Result<String, SourceError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = json!({
            "model": MODEL,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(period_label, indicator_lines) },
            ],
            "max_tokens": 800,
            "temperature": 0.5,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::malformed(format!(
                "chat endpoint returned HTTP {}",
                status
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| SourceError::malformed(format!("chat JSON decode: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(SourceError::Empty)
    }
}
