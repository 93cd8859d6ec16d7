//! User preferences persistence.
//!
//! Stores user preferences in `~/.lexigrid/preferences.json`.

use lexigrid_providers::{Difficulty, Language, WordCount, gemini};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for preferences operations.
#[derive(Error, Debug)]
pub enum PreferencesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// User preferences.
///
/// Missing fields fall back to their defaults, so older files keep loading.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// The selected theme ID.
    pub theme_id: String,
    pub language: Language,
    pub word_count: WordCount,
    pub difficulty: Difficulty,
    /// Generator model name.
    pub model: String,
    /// Used when neither `GEMINI_API_KEY` nor `API_KEY` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme_id: crate::theme::DEFAULT.id.to_string(),
            language: Language::default(),
            word_count: WordCount::default(),
            difficulty: Difficulty::default(),
            model: gemini::DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

/// Get the preferences file path (`~/.lexigrid/preferences.json`).
pub fn preferences_path() -> Result<PathBuf, PreferencesError> {
    let home = dirs::home_dir().ok_or(PreferencesError::NoHomeDir)?;
    Ok(home.join(".lexigrid").join("preferences.json"))
}

/// Load preferences from disk.
///
/// Returns default preferences if the file doesn't exist or can't be read.
pub fn load_preferences() -> Preferences {
    match preferences_path() {
        Ok(path) => load_preferences_from(&path),
        Err(_) => Preferences::default(),
    }
}

pub fn load_preferences_from(path: &Path) -> Preferences {
    if !path.exists() {
        return Preferences::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("could not read {}: {}", path.display(), e);
            return Preferences::default();
        }
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed preferences: {}", e);
        Preferences::default()
    })
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<(), PreferencesError> {
    save_preferences_to(prefs, &preferences_path()?)
}

pub fn save_preferences_to(prefs: &Preferences, path: &Path) -> Result<(), PreferencesError> {
    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    std::fs::write(path, json)?;

    Ok(())
}
