use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ===== DEFAULTS =====

pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.2-24b-instruct:free";

/// Prompt used whenever the user has not saved a custom one. Placeholders are
/// filled in by `prompt::render_prompt`.
pub const DEFAULT_PROMPT: &str = r#"You are MealMind, an AI culinary assistant. Based on the following ingredients and preferences, suggest a delicious meal idea:

Available Ingredients: {ingredients}
Dietary Preference: {preferences}
Time Available: {timeAvailable} minutes

Please provide a detailed meal suggestion that includes:
1. Recipe name
2. Brief description
3. Step-by-step instructions
4. Estimated cooking time
5. Make sure to suggest the meal based on the Dietary Preference
6. Tips for best results
7. Only suggest the meals with the available ingredients in the Fridge
8. Try to give more than 1 meal suggestion

Make sure the suggestion is practical, delicious, and fits within the time constraint. Be creative and encouraging!"#;

// ===== SETTINGS DOCUMENT =====

/// The single persisted settings document. An empty `custom_prompt` on disk
/// means "use the built-in default"; `load()` substitutes it at read time but
/// never writes the default back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(rename = "customPrompt")]
    pub custom_prompt: String,
    #[serde(rename = "selectedModel")]
    pub selected_model: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            custom_prompt: String::new(),
            selected_model: DEFAULT_MODEL.to_string(),
        }
    }
}

fn effective(mut settings: Settings) -> Settings {
    if settings.custom_prompt.is_empty() {
        settings.custom_prompt = DEFAULT_PROMPT.to_string();
    }
    if settings.selected_model.is_empty() {
        settings.selected_model = DEFAULT_MODEL.to_string();
    }
    settings
}

// ===== STORE ABSTRACTION =====

/// Settings persistence seam. The server uses the file-backed store; tests
/// substitute an in-memory one.
pub trait SettingsStore: Send + Sync {
    /// Returns the persisted settings with defaults merged in. Never fails
    /// outward: read errors degrade to pure defaults.
    fn load(&self) -> Settings;

    /// Replaces the stored document wholesale. Returns false on write failure
    /// so the HTTP layer can surface it as an explicit error.
    fn save(&self, settings: &Settings) -> bool;
}

// ===== FILE-BACKED STORE =====

pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with defaults if it does not exist yet.
    fn ensure_file(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(&Settings::default())?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to create {}", self.path.display()))?;
        Ok(())
    }

    fn read(&self) -> anyhow::Result<Settings> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let settings = serde_json::from_str(&data)
            .with_context(|| format!("invalid JSON in {}", self.path.display()))?;
        Ok(settings)
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Settings {
        if let Err(e) = self.ensure_file() {
            eprintln!("⚠️  Could not create settings file: {}", e);
        }

        match self.read() {
            Ok(settings) => effective(settings),
            Err(e) => {
                eprintln!("⚠️  Error reading settings, using defaults: {}", e);
                effective(Settings::default())
            }
        }
    }

    fn save(&self, settings: &Settings) -> bool {
        let result = serde_json::to_string_pretty(settings)
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                fs::write(&self.path, json)
                    .with_context(|| format!("failed to write {}", self.path.display()))
            });

        match result {
            Ok(()) => true,
            Err(e) => {
                eprintln!("❌ Error writing settings: {}", e);
                false
            }
        }
    }
}

// ===== IN-MEMORY STORE (tests) =====

#[cfg(test)]
pub struct MemorySettingsStore {
    inner: std::sync::Mutex<Settings>,
}

#[cfg(test)]
impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: std::sync::Mutex::new(settings),
        }
    }
}

#[cfg(test)]
impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Settings {
        effective(self.inner.lock().unwrap().clone())
    }

    fn save(&self, settings: &Settings) -> bool {
        *self.inner.lock().unwrap() = settings.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_creates_file_with_defaults() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        let settings = store.load();
        assert!(store.path().exists());
        assert_eq!(settings.custom_prompt, DEFAULT_PROMPT);
        assert_eq!(settings.selected_model, DEFAULT_MODEL);

        // Idempotent: a second load returns the same values
        let again = store.load();
        assert_eq!(again, settings);
    }

    #[test]
    fn test_default_prompt_not_written_back() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        store.load();
        let on_disk: Settings =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk.custom_prompt, "");
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::new(dir.path().join("settings.json"));

        let settings = Settings {
            custom_prompt: "Cook with {ingredients} only".to_string(),
            selected_model: "openai/gpt-oss-20b:free".to_string(),
        };
        assert!(store.save(&settings));
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn test_corrupt_file_degrades_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not valid json").unwrap();

        let store = FileSettingsStore::new(&path);
        let settings = store.load();
        assert_eq!(settings.custom_prompt, DEFAULT_PROMPT);
        assert_eq!(settings.selected_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_empty_fields_get_defaults_at_read_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"customPrompt":"","selectedModel":""}"#).unwrap();

        let store = FileSettingsStore::new(&path);
        let settings = store.load();
        assert_eq!(settings.custom_prompt, DEFAULT_PROMPT);
        assert_eq!(settings.selected_model, DEFAULT_MODEL);
    }

    #[test]
    fn test_save_to_unwritable_path_returns_false() {
        let store = FileSettingsStore::new("/nonexistent-dir/settings.json");
        assert!(!store.save(&Settings::default()));
    }
}
