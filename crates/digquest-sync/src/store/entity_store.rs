//! Chunked entity storage
//!
//! Each entity lives under its own key (`<prefix>_<id>`) and an ordered id
//! index lives under a fixed key per kind. This keeps every value small and
//! makes add/remove O(1) in stored bytes, instead of rewriting one oversized
//! collection blob on every change.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};

use super::codec;
use super::kv::KeyValueStore;
use crate::error::{Error, Result};
use crate::models::Entity;

/// Typed store for one entity kind over the shared key-value cache
pub struct EntityStore<'a, T: Entity> {
    kv: &'a dyn KeyValueStore,
    _entity: PhantomData<T>,
}

impl<'a, T: Entity> EntityStore<'a, T> {
    /// Create a store view over the given key-value cache
    #[must_use]
    pub fn new(kv: &'a dyn KeyValueStore) -> Self {
        Self {
            kv,
            _entity: PhantomData,
        }
    }

    /// Upsert an entity, returning its id
    ///
    /// Rejects entities without a server-assigned id: the cache is keyed by
    /// id and an unkeyed record cannot be stored. For newest-first kinds the
    /// index is re-sorted by `created_at` after every save, so a locally
    /// authored record lands in presentation order immediately.
    pub fn save(&self, entity: &T) -> Result<i64> {
        let id = entity.id().ok_or(Error::MissingId)?;

        self.kv
            .set(&T::KIND.entity_key(id), &codec::encode(entity)?)?;

        let mut ids = self.index()?;
        let known = ids.contains(&id);
        if !known {
            ids.push(id);
        }
        if T::KIND.newest_first() {
            self.write_index_newest_first(ids)?;
        } else if !known {
            self.write_index(&ids)?;
        }
        Ok(id)
    }

    /// Read a single entity by id
    ///
    /// Returns `Ok(None)` when the key is absent or its value cannot be
    /// decoded; one corrupt entry never fails a read.
    pub fn get(&self, id: i64) -> Result<Option<T>> {
        let key = T::KIND.entity_key(id);
        let Some(raw) = self.kv.get(&key)? else {
            return Ok(None);
        };
        match codec::decode(&raw) {
            Ok(entity) => Ok(Some(entity)),
            Err(error) => {
                tracing::warn!(%key, %error, "skipping undecodable cache entry");
                Ok(None)
            }
        }
    }

    /// Remove an entity and its index entry; idempotent for unknown ids
    pub fn remove(&self, id: i64) -> Result<()> {
        self.kv.remove(&T::KIND.entity_key(id))?;

        let mut ids = self.index()?;
        if ids.contains(&id) {
            ids.retain(|known| *known != id);
            self.write_index(&ids)?;
        }
        Ok(())
    }

    /// List every stored entity in index order
    ///
    /// Ids whose backing key is missing or undecodable are dropped, not
    /// treated as fatal; partial state degrades to a shorter list.
    pub fn list_all(&self) -> Result<Vec<T>> {
        let ids = self.index()?;
        let mut entities = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(entity) = self.get(id)? {
                entities.push(entity);
            }
        }
        Ok(entities)
    }

    /// Persist exactly the given collection, in the given order
    ///
    /// Entity keys for ids no longer present are removed, so no orphaned
    /// state survives a replacement. Entities without an id are skipped.
    pub fn replace_all(&self, entities: &[T]) -> Result<()> {
        let stale = self.index()?;

        let mut ids = Vec::with_capacity(entities.len());
        for entity in entities {
            let Some(id) = entity.id() else {
                tracing::warn!(kind = %T::KIND, "skipping entity without an id");
                continue;
            };
            self.kv
                .set(&T::KIND.entity_key(id), &codec::encode(entity)?)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        for id in stale {
            if !ids.contains(&id) {
                self.kv.remove(&T::KIND.entity_key(id))?;
            }
        }

        self.write_index(&ids)
    }

    /// Remove every entity, the index, and the kind's legacy aggregate keys
    ///
    /// Cleanup leaves no partial state behind in either storage format.
    pub fn clear_all(&self) -> Result<()> {
        for id in self.index()? {
            self.kv.remove(&T::KIND.entity_key(id))?;
        }
        self.kv.remove(T::KIND.index_key())?;
        for key in T::KIND.legacy_keys() {
            self.kv.remove(key)?;
        }
        Ok(())
    }

    /// Read the persisted id index, empty when absent or undecodable
    fn index(&self) -> Result<Vec<i64>> {
        let raw = self.kv.get(T::KIND.index_key())?;
        Ok(codec::decode_or_default(T::KIND.index_key(), raw))
    }

    fn write_index(&self, ids: &[i64]) -> Result<()> {
        self.kv.set(T::KIND.index_key(), &codec::encode(&ids)?)
    }

    fn write_index_newest_first(&self, ids: Vec<i64>) -> Result<()> {
        let mut dated: Vec<(i64, DateTime<Utc>)> = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(entity) = self.get(id)? {
                dated.push((id, entity.created_at()));
            }
        }
        dated.sort_by(|a, b| b.1.cmp(&a.1));

        let sorted: Vec<i64> = dated.into_iter().map(|(id, _)| id).collect();
        self.write_index(&sorted)
    }
}
