//! User settings for the expense tracker
//!
//! Settings are read from an optional JSON file next to the store. A missing
//! file means defaults; settings are never written implicitly.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency label shown after amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name used in the greeting
    #[serde(default = "default_user_name")]
    pub user_name: String,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_user_name() -> String {
    "Student".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            user_name: default_user_name(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))
    }
}
