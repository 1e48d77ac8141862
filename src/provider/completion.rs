use serde_json::json;

use super::parsing::{extract_completion_text, CompletionResponse};
use super::{ProviderClient, APP_REFERER, APP_TITLE};

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

impl ProviderClient {
    /// One chat-completion round trip, bounded by the configured timeout.
    /// Returns the suggestion text; every failure mode (missing key, network
    /// error, timeout, non-2xx) comes back as Err for the orchestrator to
    /// turn into a fallback.
    pub async fn request_suggestion(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, String> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ],
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE
        });

        let client = reqwest::Client::new();
        let response = client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request_body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("OpenRouter API error: {} - {}", status, error_text));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to deserialize: {}", e))?;

        Ok(extract_completion_text(completion))
    }
}
