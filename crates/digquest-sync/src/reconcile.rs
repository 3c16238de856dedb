//! Reconciliation of server collections against the local cache
//!
//! The server owns entity identity: once an id is known to the server, the
//! server's copy of that entity is authoritative. Entities that exist only
//! locally (created offline, or not yet confirmed by a round-trip) are
//! preserved and appended, never discarded.

use std::collections::HashSet;

use crate::error::Result;
use crate::models::Entity;
use crate::store::EntityStore;

impl<T: Entity> EntityStore<'_, T> {
    /// Merge a freshly fetched server collection with the cached one and
    /// persist the result
    ///
    /// Returns the authoritative merged collection: server entities first,
    /// local-only entities appended, deduplicated by id with the server copy
    /// winning. Persisting replaces the stored collection wholesale, which
    /// also trims ids the server no longer returns. When both sides are
    /// empty, storage is not touched at all.
    pub fn reconcile(&self, server: Vec<T>) -> Result<Vec<T>> {
        let mut server = server;
        server.retain(|entity| {
            if entity.id().is_some() {
                true
            } else {
                tracing::warn!(kind = %T::KIND, "dropping server entity without an id");
                false
            }
        });

        let locals = self.list_all()?;
        if server.is_empty() && locals.is_empty() {
            return Ok(Vec::new());
        }

        let server_ids: HashSet<i64> = server.iter().filter_map(Entity::id).collect();
        let local_only = locals
            .into_iter()
            .filter(|entity| !entity.id().is_some_and(|id| server_ids.contains(&id)));

        let mut merged = server;
        merged.extend(local_only);
        if T::KIND.newest_first() {
            merged.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        }

        self.replace_all(&merged)?;
        Ok(merged)
    }
}
