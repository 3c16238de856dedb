use std::path::Path;

use digquest_sync::{Find, ForumPost, Location};

use crate::cli::Kind;
use crate::commands::common::open_cache;
use crate::error::CliError;

pub fn run_remove(kind: Kind, id: i64, cache_path: Option<&Path>) -> Result<(), CliError> {
    let cache = open_cache(cache_path)?;

    match kind {
        Kind::Finds => cache.store::<Find>().remove(id)?,
        Kind::Locations => cache.store::<Location>().remove(id)?,
        Kind::Posts => cache.store::<ForumPost>().remove(id)?,
    }

    println!("Removed {id}");
    Ok(())
}
