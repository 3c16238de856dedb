//! Forum post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A thread-starting post on the community forum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPost {
    /// Server-assigned identifier, absent until the post is confirmed
    #[serde(default)]
    pub id: Option<i64>,
    /// Thread title
    pub title: String,
    /// Post body
    #[serde(default)]
    pub content: String,
    /// Display name of the author
    #[serde(default)]
    pub author: String,
    /// Reply count as last reported by the server
    #[serde(default)]
    pub reply_count: i64,
    /// Creation timestamp (ISO-8601 on the wire); drives newest-first ordering
    pub created_at: DateTime<Utc>,
}

impl ForumPost {
    /// Create a new, not-yet-synced post authored on this client
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author: String::new(),
            reply_count: 0,
            created_at: Utc::now(),
        }
    }
}

impl Entity for ForumPost {
    const KIND: EntityKind = EntityKind::ForumPost;

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
    fn round_trip_preserves_post() {
        let mut post = ForumPost::new("Best coil for stubble?", "Thinking of upgrading...");
        post.id = Some(12);
        post.author = "beachcomber".to_string();
        post.created_at = "2024-02-14T19:45:00Z".parse().unwrap();

        let json = serde_json::to_string(&post).unwrap();
        let back: ForumPost = serde_json::from_str(&json).unwrap();
        assert_eq!(back, post);
    }
}
