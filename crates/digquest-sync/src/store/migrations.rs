//! Cache format migrations
//!
//! The cache records its layout version under a reserved key and upgrades
//! itself when opened, the same way the server-side schema does. Migrations
//! are idempotent; re-running a current cache is a no-op.

use super::entity_store::EntityStore;
use super::kv::KeyValueStore;
use super::legacy;
use crate::error::Result;
use crate::models::{Entity, Find, ForumPost, Location};

/// Reserved key holding the cache layout version
const SCHEMA_VERSION_KEY: &str = "schema_version";

/// Current cache layout version
const CURRENT_VERSION: i64 = 1;

/// Run all pending migrations
pub fn run(kv: &dyn KeyValueStore) -> Result<()> {
    let version = get_version(kv)?;

    if version < 1 {
        migrate_v1(kv)?;
    }

    Ok(())
}

/// Get the recorded cache layout version, 0 when unrecorded
fn get_version(kv: &dyn KeyValueStore) -> Result<i64> {
    Ok(kv
        .get(SCHEMA_VERSION_KEY)?
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0))
}

/// Migration to version 1: fold legacy aggregate blobs into the chunked
/// layout and retire their keys
///
/// Entities already present in the chunked layout win over legacy copies of
/// the same id. Both historical Location keys are consumed.
fn migrate_v1(kv: &dyn KeyValueStore) -> Result<()> {
    fold_legacy::<Find>(kv)?;
    fold_legacy::<Location>(kv)?;
    fold_legacy::<ForumPost>(kv)?;

    kv.set(SCHEMA_VERSION_KEY, &CURRENT_VERSION.to_string())?;
    tracing::info!("Migrated cache to version {CURRENT_VERSION}");
    Ok(())
}

fn fold_legacy<T: Entity>(kv: &dyn KeyValueStore) -> Result<()> {
    let store = EntityStore::<T>::new(kv);

    let mut migrated = 0usize;
    for entity in legacy::read_all::<T>(kv)? {
        let Some(id) = entity.id() else {
            continue;
        };
        if store.get(id)?.is_none() {
            store.save(&entity)?;
            migrated += 1;
        }
    }

    for key in T::KIND.legacy_keys() {
        kv.remove(key)?;
    }

    if migrated > 0 {
        tracing::info!(kind = %T::KIND, migrated, "folded legacy cache entries");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryKeyValueStore;

    #[test]
    fn migrations_record_current_version() {
        let kv = MemoryKeyValueStore::new();
        run(&kv).unwrap();

        assert_eq!(get_version(&kv).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let kv = MemoryKeyValueStore::new();
        run(&kv).unwrap();
        run(&kv).unwrap(); // Should not fail

        assert_eq!(get_version(&kv).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn v1_folds_legacy_finds_into_chunked_layout() {
        let kv = MemoryKeyValueStore::new();
        kv.set(
            "digquest_finds",
            r#"[{"id":10,"title":"Hammered penny","created_at":"2024-01-05T00:00:00Z"}]"#,
        )
        .unwrap();

        run(&kv).unwrap();

        let store = EntityStore::<Find>::new(&kv);
        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(10));
        assert_eq!(kv.get("digquest_finds").unwrap(), None);
    }

    #[test]
    fn v1_merges_both_location_keys_and_retires_them() {
        let kv = MemoryKeyValueStore::new();
        kv.set(
            "digquest_locations",
            r#"[{"id":1,"name":"Top field","created_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        kv.set(
            "detectorist_locations",
            r#"[{"id":2,"name":"Beach","created_at":"2024-02-01T00:00:00Z"}]"#,
        )
        .unwrap();

        run(&kv).unwrap();

        let store = EntityStore::<Location>::new(&kv);
        let mut ids: Vec<Option<i64>> = store.list_all().unwrap().iter().map(|l| l.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![Some(1), Some(2)]);

        assert_eq!(kv.get("digquest_locations").unwrap(), None);
        assert_eq!(kv.get("detectorist_locations").unwrap(), None);
    }

    #[test]
    fn v1_prefers_chunked_copy_on_id_collision() {
        let kv = MemoryKeyValueStore::new();

        let store = EntityStore::<Find>::new(&kv);
        let mut chunked = Find::new("Chunked copy");
        chunked.id = Some(7);
        chunked.created_at = "2024-03-01T00:00:00Z".parse().unwrap();
        store.save(&chunked).unwrap();

        kv.set(
            "digquest_finds",
            r#"[{"id":7,"title":"Legacy copy","created_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        run(&kv).unwrap();

        assert_eq!(store.get(7).unwrap().unwrap().title, "Chunked copy");
    }

    #[test]
    fn migrated_cache_skips_legacy_reads_on_reopen() {
        let kv = MemoryKeyValueStore::new();
        run(&kv).unwrap();

        // A legacy key appearing after migration is ignored by run()
        kv.set(
            "digquest_finds",
            r#"[{"id":1,"title":"Late","created_at":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        run(&kv).unwrap();

        let store = EntityStore::<Find>::new(&kv);
        assert!(store.list_all().unwrap().is_empty());
        assert!(
            kv.get("digquest_finds").unwrap().is_some(),
            "run() must not touch legacy keys once current"
        );
    }
}
