use std::fs;
use std::io::Cursor;

use digquest_sync::{Cache, Find};
use image::{DynamicImage, GenericImageView, ImageBuffer, ImageFormat, Rgba};

use crate::cli::{CompletionShell, Kind};
use crate::commands::add::run_add;
use crate::commands::common::{resolve_cache_path, summary_line};
use crate::commands::completions::run_completions;
use crate::commands::optimize::run_optimize;
use crate::commands::reconcile::run_reconcile;
use crate::commands::remove::run_remove;
use digquest_sync::media::OptimizeOptions;

fn sample_find(id: i64, title: &str) -> String {
    format!(r#"{{"id":{id},"title":"{title}","created_at":"2024-05-01T09:00:00Z"}}"#)
}

#[test]
fn resolve_cache_path_prefers_explicit_path() {
    let explicit = std::path::Path::new("/tmp/somewhere/cache.db");
    let resolved = resolve_cache_path(Some(explicit)).unwrap();
    assert_eq!(resolved, explicit);
}

#[test]
fn summary_line_shows_id_date_and_label() {
    let mut find = Find::new("Saxon brooch");
    find.id = Some(42);
    find.created_at = "2024-05-01T09:00:00Z".parse().unwrap();

    let line = summary_line(&find);
    assert!(line.contains("42"));
    assert!(line.contains("2024-05-01"));
    assert!(line.contains("Saxon brooch"));
}

#[test]
fn add_then_remove_roundtrips_through_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("cache.db");
    let input_path = dir.path().join("find.json");
    fs::write(&input_path, sample_find(7, "Hammered penny")).unwrap();

    run_add(Kind::Finds, Some(&input_path), Some(&cache_path)).unwrap();

    let cache = Cache::open(&cache_path).unwrap();
    let all = cache.finds().list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, Some(7));
    drop(cache);

    run_remove(Kind::Finds, 7, Some(&cache_path)).unwrap();

    let cache = Cache::open(&cache_path).unwrap();
    assert!(cache.finds().list_all().unwrap().is_empty());
}

#[test]
fn reconcile_merges_server_snapshot_into_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("cache.db");

    // Offline-created find already in the cache
    {
        let cache = Cache::open(&cache_path).unwrap();
        let mut local = Find::new("Offline coin");
        local.id = Some(5);
        cache.finds().save(&local).unwrap();
    }

    let snapshot_path = dir.path().join("server.json");
    fs::write(
        &snapshot_path,
        format!("[{}]", sample_find(1, "Server find")),
    )
    .unwrap();

    run_reconcile(Kind::Finds, Some(&snapshot_path), false, Some(&cache_path)).unwrap();

    let cache = Cache::open(&cache_path).unwrap();
    let ids: Vec<Option<i64>> = cache
        .finds()
        .list_all()
        .unwrap()
        .iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(ids, vec![Some(1), Some(5)]);
}

#[test]
fn optimize_writes_a_bounded_image() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("photo.png");
    let output_path = dir.path().join("optimized.png");

    let pixels = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_fn(900, 600, |_x, _y| {
        Rgba([20, 160, 80, 255])
    });
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut cursor, ImageFormat::Png)
        .unwrap();
    fs::write(&input_path, cursor.into_inner()).unwrap();

    run_optimize(
        &input_path,
        &output_path,
        &OptimizeOptions {
            max_width: 300,
            max_height: 300,
            ..OptimizeOptions::default()
        },
    )
    .unwrap();

    let written = image::open(&output_path).unwrap();
    let (width, height) = written.dimensions();
    assert!(width <= 300);
    assert!(height <= 300);
}

#[test]
fn completions_write_a_bash_script_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("digquest.bash");

    run_completions(CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_digquest()"));
    assert!(script.contains("complete -F _digquest"));
}
