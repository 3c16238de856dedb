//! digquest-sync - Core library for DigQuest
//!
//! This crate contains the shared models, the durable client cache, and the
//! reconciliation logic used by the DigQuest client surfaces. The cache holds
//! finds, detecting locations, and forum posts between sessions; reconciling
//! a freshly fetched server collection against it yields one authoritative
//! view with server copies winning by id and offline-authored entities
//! preserved.

pub mod cache;
pub mod error;
pub mod media;
pub mod models;
mod reconcile;
pub mod store;

pub use cache::Cache;
pub use error::{Error, Result};
pub use models::{Entity, EntityKind, Find, ForumPost, Location};
