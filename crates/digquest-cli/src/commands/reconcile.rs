use std::path::Path;

use digquest_sync::{Cache, Entity, Find, ForumPost, Location};

use crate::cli::Kind;
use crate::commands::common::{open_cache, read_input, summary_line};
use crate::error::CliError;

pub fn run_reconcile(
    kind: Kind,
    input: Option<&Path>,
    as_json: bool,
    cache_path: Option<&Path>,
) -> Result<(), CliError> {
    let raw = read_input(input)?;
    let cache = open_cache(cache_path)?;

    match kind {
        Kind::Finds => reconcile_kind::<Find>(&cache, &raw, as_json),
        Kind::Locations => reconcile_kind::<Location>(&cache, &raw, as_json),
        Kind::Posts => reconcile_kind::<ForumPost>(&cache, &raw, as_json),
    }
}

fn reconcile_kind<T: Entity>(cache: &Cache, raw: &str, as_json: bool) -> Result<(), CliError> {
    let server: Vec<T> = serde_json::from_str(raw)?;
    let merged = cache.store::<T>().reconcile(server)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    println!("Reconciled {} entries", merged.len());
    for entity in &merged {
        println!("{}", summary_line(entity));
    }
    Ok(())
}
