use serde::{Deserialize, Serialize};

// ===== SUGGEST-MEAL REQUEST TYPES (from UI) =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestMealRequest {
    #[serde(default)]
    pub fridge: Vec<Ingredient>,
    #[serde(default)]
    pub preferences: String,
    #[serde(rename = "timeAvailable")]
    pub time_available: Option<u32>,
}

// ===== SUGGESTION RESPONSE =====

/// Always returned with HTTP 200: `error` present means the suggestion is a
/// local fallback, not AI-generated, but the caller still has content to show.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl SuggestionResponse {
    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

// ===== SETTINGS WIRE TYPES =====

#[derive(Debug, Deserialize)]
pub struct SettingsUpdate {
    #[serde(rename = "customPrompt")]
    pub custom_prompt: Option<String>,
    #[serde(rename = "selectedModel")]
    pub selected_model: Option<String>,
}

// ===== MODEL CATALOG =====

/// Projection of an OpenRouter catalog entry for the UI model picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub context_length: Option<u64>,
    pub pricing: Option<serde_json::Value>,
}
