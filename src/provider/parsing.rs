use serde::Deserialize;

use crate::models::ModelInfo;

// ===== API RESPONSE STRUCTURES =====

// Chat completion response structure
#[derive(Debug, Deserialize)]
pub(super) struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionChoice {
    pub message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
pub(super) struct CompletionMessage {
    pub content: String,
}

// Model listing response structure
#[derive(Debug, Deserialize)]
pub(super) struct ModelsPage {
    #[serde(default)]
    pub data: Vec<RawModel>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawModel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub context_length: Option<u64>,
    pub pricing: Option<serde_json::Value>,
    pub architecture: Option<Architecture>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Architecture {
    pub modality: Option<String>,
}

// ===== EXTRACTORS =====

pub(super) const EMPTY_SUGGESTION: &str = "Unable to generate suggestion at this time.";

/// Pull the first completion's text, falling back to a fixed string when the
/// response shape is unexpected.
pub(super) fn extract_completion_text(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_else(|| EMPTY_SUGGESTION.to_string())
}

/// Keep text-capable models only, project them for the UI, and sort by name.
pub(super) fn filter_and_project(page: ModelsPage) -> Vec<ModelInfo> {
    let mut models: Vec<ModelInfo> = page
        .data
        .into_iter()
        .filter(|model| {
            matches!(
                model
                    .architecture
                    .as_ref()
                    .and_then(|a| a.modality.as_deref()),
                Some("text->text") | Some("text+image->text")
            )
        })
        .map(|model| ModelInfo {
            id: model.id,
            name: model.name,
            description: model.description,
            context_length: model.context_length,
            pricing: model.pricing,
        })
        .collect();

    models.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    models
}
