//! Monthly market check
//!
//! One-shot batch job: resolve the five indicators, classify them, evaluate
//! the composite regime, render the summary, and deliver it to Telegram.
//! Intended to run once per invocation under an external scheduler.

use chrono::Utc;
use dotenvy::dotenv;
use macropulse::config::{self, Config};
use macropulse::logging;
use macropulse::models::signal::ClassifiedSignal;
use macropulse::report;
use macropulse::resolver::IndicatorResolver;
use macropulse::services::advisor::{self, AdvisorClient};
use macropulse::services::datalink::DatalinkClient;
use macropulse::services::fred::FredClient;
use macropulse::services::multpl::MultplClient;
use macropulse::services::telegram::TelegramClient;
use macropulse::signals::{classify, evaluate_composite};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    // Initialize logging based on environment
    logging::init_logging();

    let config = Config::from_env();
    let env = config::get_environment();
    info!(environment = %env, "Starting monthly market check");

    let token = config
        .telegram_token
        .clone()
        .ok_or("TELEGRAM_TOKEN is required")?;
    let chat_id = config
        .telegram_chat_id
        .clone()
        .ok_or("TELEGRAM_CHAT_ID is required")?;

    let mut resolver = IndicatorResolver::new(config.overrides.clone())
        .with_valuation_page(Arc::new(MultplClient::new()))
        .with_valuation_series(Arc::new(DatalinkClient::new()));
    match config.fred_api_key.clone() {
        Some(key) => {
            resolver = resolver.with_series_source(Arc::new(FredClient::new(key)));
        }
        None => {
            warn!("FRED_API_KEY not set, series-backed indicators will degrade or report unavailable");
        }
    }

    info!("Step 1: resolving indicators...");
    let set = resolver.resolve_all().await;
    let signals: Vec<ClassifiedSignal> = set.available().map(classify).collect();
    let composite = evaluate_composite(&signals);
    info!(
        regime = composite.regime.label(),
        red = composite.red,
        yellow = composite.yellow,
        green = composite.green,
        reverting = composite.reverting,
        "Composite regime evaluated: {}",
        composite.regime.label()
    );

    let period = Utc::now().format("%B %Y").to_string();

    info!("Step 2: generating analysis...");
    let analysis = match config.groq_api_key.clone() {
        Some(key) => {
            let advisor_client = AdvisorClient::new(key);
            match advisor_client
                .analyze(&period, &report::prompt_lines(&set))
                .await
            {
                Ok(text) => text,
                Err(e) => {
                    warn!(error = %e, "analysis generation failed, using placeholder");
                    advisor::FALLBACK_ANALYSIS.to_string()
                }
            }
        }
        None => {
            warn!("GROQ_API_KEY not set, skipping analysis generation");
            advisor::FALLBACK_ANALYSIS.to_string()
        }
    };

    info!("Step 3: delivering report...");
    let rendered = report::render(&period, &set, &composite, &analysis);
    let telegram = TelegramClient::new(token, chat_id);
    for part in report::message_parts(&rendered) {
        telegram.send_message(&part).await?;
    }

    info!("Monthly market check complete");
    Ok(())
}
