//! Todo Item Model
//!
//! The persisted task shape. Field names match the remote document
//! (camelCase `dueDate`); `#[serde(default)]` normalizes documents with
//! missing fields on ingestion, so state never carries an undefined
//! value (missing strings become `""`, missing booleans `false`).

use serde::{Deserialize, Serialize};

/// One task in the shared list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoItem {
    /// Free text, may be empty.
    pub description: String,
    /// Optional longer free text, may be empty.
    pub details: String,
    /// Completion flag.
    pub completed: bool,
    /// ISO `yyyy-mm-dd`, or empty when the task has no due date.
    pub due_date: String,
}

impl TodoItem {
    /// The blank item appended by the add button.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_normalized_on_ingestion() {
        let item: TodoItem = serde_json::from_str(r#"{"description":"call mom"}"#).unwrap();
        assert_eq!(item.description, "call mom");
        assert_eq!(item.details, "");
        assert!(!item.completed);
        assert_eq!(item.due_date, "");
    }

    #[test]
    fn unknown_fields_are_dropped() {
        let item: TodoItem =
            serde_json::from_str(r#"{"description":"x","legacyFlag":true}"#).unwrap();
        assert_eq!(item.description, "x");
    }

    #[test]
    fn due_date_round_trips_as_camel_case() {
        let item = TodoItem {
            description: "taxes".into(),
            due_date: "2024-02-11".into(),
            ..TodoItem::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["dueDate"], "2024-02-11");
    }
}
