use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use digquest_sync::{Cache, Entity};

use crate::error::CliError;

/// Resolve the cache file path: explicit flag, or the user cache directory
pub fn resolve_cache_path(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let dir = dirs::cache_dir().ok_or(CliError::NoCacheDir)?.join("digquest");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("cache.db"))
}

/// Open the cache at the resolved path, running pending migrations
pub fn open_cache(cache_path: Option<&Path>) -> Result<Cache, CliError> {
    Ok(Cache::open(resolve_cache_path(cache_path)?)?)
}

/// Read JSON input from a file, or stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// One-line human-readable summary of a cached entity
///
/// Shows the id, the creation date, and the entity's display label (its
/// `title` or `name` field, whichever the kind carries).
pub fn summary_line<T: Entity>(entity: &T) -> String {
    let id = entity
        .id()
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let label = serde_json::to_value(entity)
        .ok()
        .and_then(|value| {
            ["title", "name"].iter().find_map(|field| {
                value
                    .get(field)
                    .and_then(|label| label.as_str())
                    .map(str::to_string)
            })
        })
        .unwrap_or_default();

    format!(
        "{id:>6}  {}  {label}",
        entity.created_at().format("%Y-%m-%d %H:%M")
    )
}
