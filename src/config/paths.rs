//! Path management for the expense tracker
//!
//! The tracker keeps its whole state in a single JSON file.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_TRACKER_DATA_FILE` environment variable (if set and non-empty)
//! 2. `data.json` in the current working directory

use std::path::{Path, PathBuf};

/// Environment variable overriding the store location
pub const DATA_FILE_ENV: &str = "EXPENSE_TRACKER_DATA_FILE";

/// Default store file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "data.json";

const SETTINGS_FILE: &str = "expense-tracker.json";

/// Manages the paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    data_file: PathBuf,
}

impl ExpensePaths {
    /// Resolve paths from the environment
    pub fn new() -> Self {
        Self::resolve(std::env::var(DATA_FILE_ENV).ok())
    }

    /// Resolve paths from an optional override value
    pub fn resolve(override_value: Option<String>) -> Self {
        let data_file = override_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Self { data_file }
    }

    /// Create ExpensePaths pointing at an explicit store file (useful for testing)
    pub fn with_data_file(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Get the path to the JSON store
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the path to the optional settings file (next to the store)
    pub fn settings_file(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) => parent.join(SETTINGS_FILE),
            None => PathBuf::from(SETTINGS_FILE),
        }
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = ExpensePaths::resolve(None);
        assert_eq!(paths.data_file(), Path::new("data.json"));
        assert_eq!(paths.settings_file(), PathBuf::from("expense-tracker.json"));
    }

    #[test]
    fn test_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom = temp_dir.path().join("store.json");

        let paths = ExpensePaths::resolve(Some(custom.to_string_lossy().into_owned()));
        assert_eq!(paths.data_file(), custom.as_path());
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expense-tracker.json")
        );
    }

    #[test]
    fn test_blank_override_falls_back() {
        let paths = ExpensePaths::resolve(Some("   ".into()));
        assert_eq!(paths.data_file(), Path::new(DEFAULT_DATA_FILE));
    }
}
