use crate::domain::id::EntryId;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single card on the board: a description plus a completion flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub description: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub status: bool,
}

impl Entry {
    /// Creates a new entry with a freshly generated id, not yet completed
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: EntryId::generate(),
            description: description.into(),
            status: false,
        }
    }

    pub fn with_status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = Entry::new("Write release notes");
        assert_eq!(entry.description, "Write release notes");
        assert!(!entry.status);
        assert!(entry.id.as_str().starts_with("entry-"));
    }

    #[test]
    fn test_status_omitted_when_false() {
        let entry = Entry::new("Pending card");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("status"));

        let done = entry.with_status(true);
        let json = serde_json::to_string(&done).unwrap();
        assert!(json.contains("\"status\":true"));
    }

    #[test]
    fn test_deserializes_snapshot_without_status() {
        let old_json = r#"{
            "id": "entry-101",
            "description": "Set up project structure"
        }"#;

        let entry: Entry = serde_json::from_str(old_json).unwrap();
        assert_eq!(entry.id.as_str(), "entry-101");
        assert!(!entry.status);
    }
}
