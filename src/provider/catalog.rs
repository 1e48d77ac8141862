use std::time::Duration;

use super::parsing::{filter_and_project, ModelsPage};
use super::{ProviderClient, APP_REFERER, APP_TITLE};
use crate::models::ModelInfo;

// The catalog call keeps its own bound, separate from the suggestion timeout
const MODELS_TIMEOUT_SECS: u64 = 15;

impl ProviderClient {
    /// Fetch the provider's model listing, filtered to text-capable models
    /// and sorted by display name. Any failure (timeout included) surfaces
    /// as Err rather than partial data.
    pub async fn fetch_models(&self) -> Result<Vec<ModelInfo>, String> {
        let api_key = self.api_key()?;
        let url = format!("{}/models", self.base_url);

        let client = reqwest::Client::new();
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .timeout(Duration::from_secs(MODELS_TIMEOUT_SECS))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    "Request timed out. Please try again.".to_string()
                } else {
                    format!("Request failed: {}", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch models: {}", status));
        }

        let page: ModelsPage = response
            .json()
            .await
            .map_err(|e| format!("Failed to deserialize: {}", e))?;

        Ok(filter_and_project(page))
    }
}
