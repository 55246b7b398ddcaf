//! Storage layer for the expense tracker
//!
//! The whole store is a single JSON document. It is read in full on every
//! load and rewritten in full (atomically) on every save; nothing is cached.

pub mod document;
pub mod file_io;

pub use document::StoreDocument;
pub use file_io::{read_json, write_json_atomic};

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExpenseError;

/// JSON file storage for the store document
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Open storage at `path`, writing an empty document first if the file is absent
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ExpenseError> {
        let storage = Self { path: path.into() };

        if !storage.path.exists() {
            info!(path = %storage.path.display(), "creating empty expense store");
            storage.save(&StoreDocument::default())?;
        }

        Ok(storage)
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document from disk
    pub fn load(&self) -> Result<StoreDocument, ExpenseError> {
        let document: StoreDocument = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            records = document.len(),
            next_id = %document.next_id,
            "loaded expense store"
        );
        Ok(document)
    }

    /// Rewrite the full document on disk
    pub fn save(&self, document: &StoreDocument) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, document)?;
        debug!(
            path = %self.path.display(),
            records = document.len(),
            "saved expense store"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId, Money, Record};
    use tempfile::TempDir;

    #[test]
    fn test_fresh_storage_creates_empty_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        let storage = JsonStorage::new(&path).unwrap();
        assert!(path.exists());

        let doc = storage.load().unwrap();
        assert_eq!(doc, StoreDocument::default());

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({"next_id": 1, "records": []}));
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, r#"{"next_id": 9, "records": []}"#).unwrap();

        let storage = JsonStorage::new(&path).unwrap();
        assert_eq!(storage.load().unwrap().next_id.get(), 9);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(temp_dir.path().join("data.json")).unwrap();

        let doc = StoreDocument {
            next_id: ExpenseId::new(3).unwrap(),
            records: vec![
                Expense::new(ExpenseId::new(1).unwrap(), Money::from_cents(1999), "food", "pizza")
                    .into(),
                Expense::new(ExpenseId::new(2).unwrap(), Money::from_cents(5), "misc", "")
                    .into(),
            ],
        };

        storage.save(&doc).unwrap();
        assert_eq!(storage.load().unwrap(), doc);
    }

    #[test]
    fn test_unicode_is_written_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let storage = JsonStorage::new(&path).unwrap();

        let doc = StoreDocument {
            next_id: ExpenseId::new(2).unwrap(),
            records: vec![Record::from(Expense::new(
                ExpenseId::FIRST,
                Money::from_cents(300),
                "café",
                "crème brûlée",
            ))],
        };
        storage.save(&doc).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("crème brûlée"));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        std::fs::write(&path, "{\"next_id\": 1, \"records\": [").unwrap();

        let storage = JsonStorage::new(&path).unwrap();
        assert!(storage.load().unwrap_err().is_parse());
    }
}
