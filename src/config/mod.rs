//! Environment-driven configuration.
//!
//! Credentials and operator overrides are read once at startup and passed
//! explicitly into the resolver and delivery clients, so the core stays
//! testable without environment mutation.

use std::env;

/// Operator-supplied override values for indicators whose published sources
/// lag or go dark. Empty or unparsable values are ignored.
#[derive(Debug, Clone, Default)]
pub struct ManualOverrides {
    pub pmi: Option<f64>,
    pub pmi_prev: Option<f64>,
    pub cape: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub fred_api_key: Option<String>,
    pub telegram_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub groq_api_key: Option<String>,
    pub overrides: ManualOverrides,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            fred_api_key: non_empty_var("FRED_API_KEY"),
            telegram_token: non_empty_var("TELEGRAM_TOKEN"),
            telegram_chat_id: non_empty_var("TELEGRAM_CHAT_ID"),
            groq_api_key: non_empty_var("GROQ_API_KEY"),
            overrides: ManualOverrides {
                pmi: numeric_var("PMI_MANUAL"),
                pmi_prev: numeric_var("PMI_PREV"),
                cape: numeric_var("CAPE_MANUAL"),
            },
        }
    }
}

/// Get the current environment (production, sandbox, etc.)
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn numeric_var(name: &str) -> Option<f64> {
    non_empty_var(name).and_then(|v| v.parse().ok())
}
