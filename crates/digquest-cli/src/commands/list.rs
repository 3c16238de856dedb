use std::path::Path;

use digquest_sync::{Cache, Entity, Find, ForumPost, Location};

use crate::cli::Kind;
use crate::commands::common::{open_cache, summary_line};
use crate::error::CliError;

pub fn run_list(kind: Kind, as_json: bool, cache_path: Option<&Path>) -> Result<(), CliError> {
    let cache = open_cache(cache_path)?;
    match kind {
        Kind::Finds => print_all::<Find>(&cache, as_json),
        Kind::Locations => print_all::<Location>(&cache, as_json),
        Kind::Posts => print_all::<ForumPost>(&cache, as_json),
    }
}

fn print_all<T: Entity>(cache: &Cache, as_json: bool) -> Result<(), CliError> {
    let entities = cache.store::<T>().list_all()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entities)?);
        return Ok(());
    }

    if entities.is_empty() {
        println!("No cached entries.");
        return Ok(());
    }

    for entity in &entities {
        println!("{}", summary_line(entity));
    }
    Ok(())
}
