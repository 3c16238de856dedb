//! Data models for DigQuest

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

mod find;
mod location;
mod post;

pub use find::Find;
pub use location::Location;
pub use post::ForumPost;

/// The entity kinds handled by the synchronization layer.
///
/// Each kind owns a disjoint key-space in the cache: a per-entity key prefix,
/// an id-index key, and the aggregate key(s) the retired single-blob format
/// stored the whole collection under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Find,
    Location,
    ForumPost,
}

impl EntityKind {
    /// Prefix for per-entity keys (`<prefix>_<id>`).
    pub const fn key_prefix(self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::Location => "location",
            Self::ForumPost => "post",
        }
    }

    /// Key holding the ordered list of known ids.
    pub const fn index_key(self) -> &'static str {
        match self {
            Self::Find => "find_ids",
            Self::Location => "location_ids",
            Self::ForumPost => "post_ids",
        }
    }

    /// Aggregate keys used by the retired whole-collection format.
    ///
    /// Locations carry two keys from a historical rename; both are equally
    /// valid sources during migration.
    pub const fn legacy_keys(self) -> &'static [&'static str] {
        match self {
            Self::Find => &["digquest_finds"],
            Self::Location => &["digquest_locations", "detectorist_locations"],
            Self::ForumPost => &["digquest_forum_posts"],
        }
    }

    /// Whether the stored collection is kept ordered newest-first.
    ///
    /// Forum threads are rendered in creation order, newest at the top,
    /// without re-sorting downstream.
    pub const fn newest_first(self) -> bool {
        matches!(self, Self::ForumPost)
    }

    /// Storage key for a single entity of this kind.
    #[must_use]
    pub fn entity_key(self, id: i64) -> String {
        format!("{}_{id}", self.key_prefix())
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_prefix())
    }
}

/// A record the synchronization layer can cache and reconcile.
///
/// The layer never inspects kind-specific payload fields; it only needs the
/// server-assigned id, the creation timestamp, and the kind's key-space.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Key-space this kind stores under.
    const KIND: EntityKind;

    /// Server-assigned id, `None` until the record has completed a server
    /// round-trip.
    fn id(&self) -> Option<i64>;

    /// Creation timestamp, used for newest-first ordering.
    fn created_at(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_keys_are_disjoint_per_kind() {
        assert_eq!(EntityKind::Find.entity_key(5), "find_5");
        assert_eq!(EntityKind::Location.entity_key(5), "location_5");
        assert_eq!(EntityKind::ForumPost.entity_key(5), "post_5");
    }

    #[test]
    fn only_posts_are_newest_first() {
        assert!(EntityKind::ForumPost.newest_first());
        assert!(!EntityKind::Find.newest_first());
        assert!(!EntityKind::Location.newest_first());
    }

    #[test]
    fn locations_read_both_historical_keys() {
        assert_eq!(
            EntityKind::Location.legacy_keys(),
            &["digquest_locations", "detectorist_locations"]
        );
    }
}
