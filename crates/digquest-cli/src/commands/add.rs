use std::path::Path;

use digquest_sync::{Cache, Entity, Find, ForumPost, Location};

use crate::cli::Kind;
use crate::commands::common::{open_cache, read_input};
use crate::error::CliError;

pub fn run_add(
    kind: Kind,
    input: Option<&Path>,
    cache_path: Option<&Path>,
) -> Result<(), CliError> {
    let raw = read_input(input)?;
    let cache = open_cache(cache_path)?;

    let id = match kind {
        Kind::Finds => add_one::<Find>(&cache, &raw)?,
        Kind::Locations => add_one::<Location>(&cache, &raw)?,
        Kind::Posts => add_one::<ForumPost>(&cache, &raw)?,
    };

    println!("{id}");
    Ok(())
}

fn add_one<T: Entity>(cache: &Cache, raw: &str) -> Result<i64, CliError> {
    let entity: T = serde_json::from_str(raw)?;
    Ok(cache.store::<T>().save(&entity)?)
}
