//! Storage layer for the DigQuest client cache

pub(crate) mod codec;
mod entity_store;
mod kv;
pub(crate) mod legacy;
pub(crate) mod migrations;

pub use entity_store::EntityStore;
pub use kv::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore};
