mod catalog;
mod completion;
mod parsing;

use std::time::Duration;

// ===== OPENROUTER CONFIGURATION =====

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

// Attribution headers OpenRouter uses for app rankings
pub const APP_REFERER: &str = "https://mealmind.vercel.app";
pub const APP_TITLE: &str = "MealMind";

const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 30;

// ===== CLIENT =====

/// Handle to the hosted language-model provider. Holds everything the two
/// outbound calls (chat completion, model listing) need; the timeout bounds
/// the completion call only, the catalog has its own fixed bound.
pub struct ProviderClient {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ProviderClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            timeout,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| OPENROUTER_BASE_URL.to_string());
        let api_key = std::env::var("OPENROUTER_API_KEY").ok();
        let timeout = std::env::var("SUGGEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SUGGEST_TIMEOUT_SECS);

        Self::new(base_url, api_key, Duration::from_secs(timeout))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn api_key(&self) -> Result<&str, String> {
        self.api_key
            .as_deref()
            .ok_or_else(|| "OPENROUTER_API_KEY not set in .env".to_string())
    }
}
