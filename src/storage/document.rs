//! The on-disk store document
//!
//! ```json
//! {
//!   "next_id": 3,
//!   "records": [
//!     {"type": "expense", "id": 1, "created_at": "2025-01-02T08:00:00",
//!      "amount": 12.5, "category": "food", "note": "lunch"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{ExpenseId, Record};

/// Full persisted state: the id counter plus every record in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Id handed to the next expense (always >= 1)
    pub next_id: ExpenseId,

    /// Records in insertion order
    #[serde(deserialize_with = "deserialize_records")]
    pub records: Vec<Record>,
}

impl StoreDocument {
    /// Number of records of any kind
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            next_id: ExpenseId::FIRST,
            records: Vec::new(),
        }
    }
}

/// Records without a string `type` tag are kept as `Record::Unknown` rather
/// than failing the whole load.
fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;

    raw.into_iter()
        .map(|value| {
            if value.get("type").and_then(serde_json::Value::as_str).is_none() {
                return Ok(Record::Unknown);
            }
            Record::deserialize(value).map_err(<D::Error as serde::de::Error>::custom)
        })
        .collect()
}
