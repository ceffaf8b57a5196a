//! Cache manager tests. Everything here runs offline.

mod common;

use hsdeck_info::cache::{read_json_file, CacheManager};
use hsdeck_info::{config, DeckInfoError};
use std::time::Duration;

fn offline_cache(dir: &std::path::Path) -> CacheManager {
    CacheManager::new(Some(dir.to_path_buf()), true, Duration::from_secs(5)).unwrap()
}

#[test]
fn new_creates_cache_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("cache");
    let cache = offline_cache(&dir);
    assert!(dir.is_dir());
    assert_eq!(cache.cache_dir, dir);
    assert!(cache.offline);
}

#[test]
fn catalog_path_is_per_locale() {
    let tmp = tempfile::tempdir().unwrap();
    let cache = offline_cache(tmp.path());
    assert_eq!(
        cache.catalog_path("deDE"),
        tmp.path().join("deDE").join("cards.collectible.json")
    );
}

#[test]
fn catalog_url_points_at_latest_build() {
    assert_eq!(
        config::catalog_url("enUS"),
        "https://api.hearthstonejson.com/v1/latest/enUS/cards.collectible.json"
    );
}

#[test]
fn offline_without_cached_catalog_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    let err = cache.load_catalog("enUS").unwrap_err();
    assert!(matches!(err, DeckInfoError::NotFound(_)));
}

#[test]
fn offline_reads_cached_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    common::seed_catalog(tmp.path(), &common::sample_catalog());
    let mut cache = offline_cache(tmp.path());

    let value = cache.load_catalog("enUS").unwrap();
    assert_eq!(value.as_array().unwrap().len(), 15);
}

#[test]
fn corrupt_cached_catalog_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    let path = cache.catalog_path("enUS");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[{\"dbfId\": 1,").unwrap();

    let err = cache.load_catalog("enUS").unwrap_err();
    match err {
        DeckInfoError::NotFound(msg) => assert!(msg.contains("corrupt")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn wrongly_shaped_cached_catalog_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    common::seed_catalog(tmp.path(), &serde_json::json!({"error": "rate limited"}));
    let mut cache = offline_cache(tmp.path());
    let path = cache.catalog_path("enUS");
    assert!(path.exists());

    let err = cache.load_catalog("enUS").unwrap_err();
    match err {
        DeckInfoError::NotFound(msg) => {
            assert!(msg.contains("corrupt"));
            assert!(msg.contains("array of cards"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn cached_catalog_with_non_object_entries_is_removed() {
    let tmp = tempfile::tempdir().unwrap();
    common::seed_catalog(tmp.path(), &serde_json::json!([{"dbfId": 1}, "oops"]));
    let info = hsdeck_info::DeckInfo::builder()
        .cache_dir(tmp.path())
        .offline(true)
        .build()
        .unwrap();

    let err = info.catalog().unwrap_err();
    assert!(matches!(err, DeckInfoError::NotFound(_)));
    assert!(!info.cache().catalog_path("enUS").exists());
}

#[test]
fn offline_remote_version_is_unknown() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    assert_eq!(cache.remote_version("enUS").unwrap(), None);
}

#[test]
fn staleness_without_and_with_local_version() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cache = offline_cache(tmp.path());
    assert!(cache.is_stale("enUS").unwrap());

    std::fs::write(tmp.path().join("version.txt"), "187681\n").unwrap();
    // Unknown remote build never counts as stale.
    assert!(!cache.is_stale("enUS").unwrap());
}

#[test]
fn clear_removes_cached_files() {
    let tmp = tempfile::tempdir().unwrap();
    common::seed_catalog(tmp.path(), &common::sample_catalog());
    let cache = offline_cache(tmp.path());
    assert!(cache.catalog_path("enUS").exists());

    cache.clear().unwrap();
    assert!(!cache.catalog_path("enUS").exists());
    assert!(tmp.path().is_dir());
}

#[test]
fn offline_refresh_keeps_cache() {
    let (info, tmp) = common::setup_sample_info();
    assert!(!info.refresh().unwrap());
    assert!(tmp.path().join("enUS").join("cards.collectible.json").exists());
}

#[test]
fn read_json_file_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = read_json_file(&tmp.path().join("nope.json")).unwrap_err();
    assert!(matches!(missing, DeckInfoError::Io(_)));

    let bad = tmp.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();
    assert!(matches!(read_json_file(&bad).unwrap_err(), DeckInfoError::Json(_)));
}

#[test]
fn deck_info_display_reports_catalog_state() {
    let (info, _tmp) = common::setup_sample_info();
    assert!(info.to_string().contains("catalog_cards=not loaded"));
    info.catalog().unwrap();
    let shown = info.to_string();
    assert!(shown.contains("locale=enUS"));
    assert!(shown.contains("offline=true"));
    assert!(shown.contains("catalog_cards=14"));
}
