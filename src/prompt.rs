//! Prompt template rendering.
//!
//! Substitution is textual and unconditional: every occurrence of a known
//! placeholder is replaced (case-sensitive, exact braces), and any other
//! `{...}` token is left verbatim. No escaping, no recursive expansion.

/// The placeholder tokens a template may contain.
pub const PLACEHOLDER_INGREDIENTS: &str = "{ingredients}";
pub const PLACEHOLDER_PREFERENCES: &str = "{preferences}";
pub const PLACEHOLDER_TIME: &str = "{timeAvailable}";

/// Fill a prompt template with the user's request values. Ingredient names
/// are joined with ", " to form the substitution value.
pub fn render_prompt(
    template: &str,
    ingredients: &[String],
    preferences: &str,
    time_available: u32,
) -> String {
    template
        .replace(PLACEHOLDER_INGREDIENTS, &ingredients.join(", "))
        .replace(PLACEHOLDER_PREFERENCES, preferences)
        .replace(PLACEHOLDER_TIME, &time_available.to_string())
}
