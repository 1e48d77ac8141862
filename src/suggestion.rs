use crate::models::{Ingredient, SuggestMealRequest, SuggestionResponse};
use crate::prompt::render_prompt;
use crate::provider::ProviderClient;
use crate::settings::SettingsStore;

// ===== FIXED STRINGS =====

pub const SYSTEM_PROMPT: &str = "You are MealMind, a friendly and knowledgeable culinary AI assistant. You help users create delicious meals based on your available ingredients, dietary preferences, and time constraints. Always be encouraging, practical, and provide detailed, easy-to-follow instructions.";

pub const FALLBACK_ERROR: &str = "AI service temporarily unavailable, showing fallback suggestion";

const DEFAULT_TIME_MINUTES: u32 = 30;

// ===== ORCHESTRATOR =====

/// Run the full suggestion flow: effective settings → rendered prompt → one
/// provider call. Every failure collapses into a fallback response so the
/// caller always has renderable content; the `error` field is the only signal
/// that the result is degraded.
pub async fn suggest(
    store: &dyn SettingsStore,
    provider: &ProviderClient,
    request: &SuggestMealRequest,
) -> SuggestionResponse {
    let settings = store.load();
    let names: Vec<String> = request.fridge.iter().map(|i| i.name.clone()).collect();
    let time = request.time_available.unwrap_or(DEFAULT_TIME_MINUTES);

    let user_prompt = render_prompt(&settings.custom_prompt, &names, &request.preferences, time);

    match provider
        .request_suggestion(&settings.selected_model, SYSTEM_PROMPT, &user_prompt)
        .await
    {
        Ok(text) => SuggestionResponse {
            suggestion: text,
            error: None,
            details: None,
        },
        Err(e) => {
            eprintln!("❌ AI suggestion failed: {}", e);
            fallback_response(&join_ingredient_names(&request.fridge), time, e)
        }
    }
}

// ===== FALLBACK SYNTHESIS =====

pub fn join_ingredient_names(fridge: &[Ingredient]) -> String {
    fridge
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Canned stir-fry suggestion built from the raw ingredient list, used when
/// the provider call cannot complete.
fn fallback_suggestion(items: &str, time: u32) -> String {
    format!(
        r#"# Quick Meal Idea

Based on your available ingredients ({items}), here's a simple suggestion:

## Simple Stir-Fry
**Cooking Time:** {time} minutes

### Ingredients:
- Your available ingredients: {items}
- Basic seasonings (salt, pepper, oil)

### Instructions:
1. Heat oil in a pan over medium heat
2. Add your ingredients and stir-fry for 5-7 minutes
3. Season with salt and pepper to taste
4. Serve hot

*Note: This is a fallback suggestion. The AI service is currently unavailable, but you can still create a delicious meal with your available ingredients!*

### Tips:
- Adjust cooking time based on your ingredients
- Add herbs or spices if available
- Consider adding a protein source if you have any"#
    )
}

pub fn fallback_response(items: &str, time: u32, details: String) -> SuggestionResponse {
    SuggestionResponse {
        suggestion: fallback_suggestion(items, time),
        error: Some(FALLBACK_ERROR.to_string()),
        details: Some(details),
    }
}

/// Used when even the request body could not be recovered: no ingredient
/// list, fixed 30 minute estimate.
pub fn generic_fallback_response(details: String) -> SuggestionResponse {
    SuggestionResponse {
        suggestion: r#"# Quick Meal Idea

## Simple Stir-Fry
**Cooking Time:** 30 minutes

### Instructions:
1. Heat oil in a pan over medium heat
2. Add your available ingredients and stir-fry for 5-7 minutes
3. Season with salt and pepper to taste
4. Serve hot

*Note: This is a fallback suggestion. The AI service is currently unavailable.*"#
            .to_string(),
        error: Some(FALLBACK_ERROR.to_string()),
        details: Some(details),
    }
}
