//! Find model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A dug-up find shared to the community gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Find {
    /// Server-assigned identifier, absent until the upload is confirmed
    #[serde(default)]
    pub id: Option<i64>,
    /// Short display title
    pub title: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Where the find was made (free text, not a map reference)
    #[serde(default)]
    pub location: String,
    /// Historical period, when known (e.g. "Roman", "Victorian")
    #[serde(default)]
    pub period: Option<String>,
    /// URL of the uploaded photo
    #[serde(default)]
    pub image_url: Option<String>,
    /// Like count as last reported by the server
    #[serde(default)]
    pub likes: i64,
    /// Creation timestamp (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,
}

impl Find {
    /// Create a new, not-yet-synced find authored on this client
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: String::new(),
            location: String::new(),
            period: None,
            image_url: None,
            likes: 0,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Find {
    const KIND: EntityKind = EntityKind::Find;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_find_has_no_id() {
        let find = Find::new("Hammered coin");
        assert_eq!(find.id, None);
        assert_eq!(find.title, "Hammered coin");
    }

    #[test]
    fn wire_timestamps_are_iso_8601() {
        let mut find = Find::new("Buckle");
        find.id = Some(3);
        find.created_at = "2024-05-01T12:30:00Z".parse().unwrap();

        let json = serde_json::to_string(&find).unwrap();
        assert!(json.contains("\"created_at\":\"2024-05-01T12:30:00Z\""));

        let back: Find = serde_json::from_str(&json).unwrap();
        assert_eq!(back, find);
    }

    #[test]
    fn decode_tolerates_missing_optional_fields() {
        let find: Find = serde_json::from_str(
            r#"{"id":9,"title":"Musket ball","created_at":"2024-01-02T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(find.id, Some(9));
        assert_eq!(find.likes, 0);
        assert_eq!(find.period, None);
    }
}
