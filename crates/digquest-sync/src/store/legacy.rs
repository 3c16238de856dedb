//! Reader for the retired whole-collection-under-one-key cache format
//!
//! Earlier client builds stored each kind as one JSON array under a single
//! aggregate key. The format is read exactly once, by the v1 migration, and
//! never written again.

use std::collections::HashSet;

use super::codec;
use super::kv::KeyValueStore;
use crate::error::Result;
use crate::models::Entity;

/// Read every legacy aggregate entry for an entity kind
///
/// All of the kind's historical keys are treated as equally valid sources;
/// entries are deduplicated by id keeping the first occurrence. Entries
/// without an id cannot be keyed in the current layout and are dropped.
pub fn read_all<T: Entity>(kv: &dyn KeyValueStore) -> Result<Vec<T>> {
    let mut seen = HashSet::new();
    let mut entities = Vec::new();

    for &key in T::KIND.legacy_keys() {
        for entity in codec::decode_or_default::<T>(key, kv.get(key)?) {
            match entity.id() {
                Some(id) if seen.insert(id) => entities.push(entity),
                Some(_) => {}
                None => {
                    tracing::warn!(key, "dropping legacy entry without an id");
                }
            }
        }
    }

    Ok(entities)
}
