//! Detecting location model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A detecting spot pinned on the community map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Server-assigned identifier, absent until the creation is confirmed
    #[serde(default)]
    pub id: Option<i64>,
    /// Display name of the spot
    pub name: String,
    /// Access notes, permissions, terrain
    #[serde(default)]
    pub description: String,
    /// Latitude in decimal degrees
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(default)]
    pub longitude: f64,
    /// Whether the spot is visible to every member or only its author
    #[serde(default)]
    pub is_public: bool,
    /// Creation timestamp (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,
}

impl Location {
    /// Create a new, not-yet-synced location authored on this client
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            latitude,
            longitude,
            is_public: false,
            created_at: Utc::now(),
        }
    }
}

impl Entity for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
