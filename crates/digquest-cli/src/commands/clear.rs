use std::path::Path;

use digquest_sync::{Find, ForumPost, Location};

use crate::cli::Kind;
use crate::commands::common::open_cache;
use crate::error::CliError;

pub fn run_clear(kind: Kind, cache_path: Option<&Path>) -> Result<(), CliError> {
    let cache = open_cache(cache_path)?;

    match kind {
        Kind::Finds => cache.store::<Find>().clear_all()?,
        Kind::Locations => cache.store::<Location>().clear_all()?,
        Kind::Posts => cache.store::<ForumPost>().clear_all()?,
    }

    println!("Cache cleared");
    Ok(())
}
