//! Cache service
//!
//! [`Cache`] is the entry point to the synchronization layer: it owns the
//! key-value store, runs pending format migrations once when constructed,
//! and hands out typed [`EntityStore`]s. Callers construct and thread the
//! value explicitly; the crate holds no global state.

use std::path::Path;

use crate::error::Result;
use crate::models::{Entity, Find, ForumPost, Location};
use crate::store::{migrations, EntityStore, KeyValueStore, SqliteKeyValueStore};

/// The client cache for finds, locations, and forum posts
pub struct Cache<S: KeyValueStore = SqliteKeyValueStore> {
    kv: S,
}

impl Cache<SqliteKeyValueStore> {
    /// Open a durable cache at the given path, creating it if it doesn't
    /// exist
    ///
    /// Runs migrations automatically.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_store(SqliteKeyValueStore::open(path)?)
    }

    /// Open an in-memory cache (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::with_store(SqliteKeyValueStore::open_in_memory()?)
    }
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap an existing key-value store, running pending migrations
    pub fn with_store(kv: S) -> Result<Self> {
        migrations::run(&kv)?;
        Ok(Self { kv })
    }

    /// Typed store for cached finds
    pub fn finds(&self) -> EntityStore<'_, Find> {
        self.store()
    }

    /// Typed store for cached detecting locations
    pub fn locations(&self) -> EntityStore<'_, Location> {
        self.store()
    }

    /// Typed store for cached forum posts
    pub fn posts(&self) -> EntityStore<'_, ForumPost> {
        self.store()
    }

    /// Typed store for any entity kind
    pub fn store<T: Entity>(&self) -> EntityStore<'_, T> {
        EntityStore::new(&self.kv)
    }
}
