//! Tests for storage/json_store

use super::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_catalog_array() {
    let catalog = parse_catalog_json(
        r#"[
            {"id": "f1", "name": "Openings", "ranges": [
                {"id": "r1", "name": "Aggro"},
                {"id": "r2", "name": "Balanced"}
            ]}
        ]"#,
    );

    assert_eq!(
        catalog,
        Catalog::new(vec![Folder::new(
            "f1",
            "Openings",
            vec![Range::new("r1", "Aggro"), Range::new("r2", "Balanced")]
        )])
    );
}

#[test]
fn test_parse_catalog_folders_object() {
    let catalog = parse_catalog_json(
        r#"{"folders": [{"id": "f1", "name": "F", "ranges": [{"id": "r1", "name": "A"}]}]}"#,
    );
    assert_eq!(catalog.range_count(), 1);
}

#[test]
fn test_parse_catalog_skips_malformed_entries() {
    let catalog = parse_catalog_json(
        r#"[
            "not a folder",
            {"id": "f1", "name": "F", "ranges": [
                {"id": "r1", "name": "A"},
                {"name": "no id"},
                {"id": 3, "name": "numeric id"},
                {"id": "r2"}
            ]},
            {"id": "f2", "name": 9, "ranges": "nope"}
        ]"#,
    );

    assert_eq!(catalog.folders().len(), 2);
    assert_eq!(
        catalog.folders()[0].ranges,
        vec![Range::new("r1", "A"), Range::new("r2", "")]
    );
    assert_eq!(catalog.folders()[1], Folder::new("f2", "", Vec::new()));
}

#[test]
fn test_range_with_bad_name_still_resolves() {
    let catalog = parse_catalog_json(
        r#"[{"id": "f", "name": "F", "ranges": [
            {"id": "r1", "name": null},
            {"id": "r2", "name": 12}
        ]}]"#,
    );
    assert_eq!(catalog.range_count(), 2);

    let usage = UsageTable::new().with("r1", 4);
    let stats = crate::stats::StatsResolver::resolve(
        &crate::model::Chart::new("c", vec![crate::model::Button::normal("r1")]),
        &catalog,
        &usage,
    );

    assert_eq!(stats.len(), 1);
    assert!(!stats[0].orphan);
    assert_eq!(stats[0].folder_name, "F");
    assert_eq!(stats[0].range_name, "");
    assert_eq!(stats[0].count, 4);
}

#[test]
fn test_parse_catalog_invalid_json_is_empty() {
    assert!(parse_catalog_json("{{{").is_empty());
    assert!(parse_catalog_json("42").is_empty());
    assert!(parse_catalog_json(r#"{"other": []}"#).is_empty());
}

#[test]
fn test_parse_usage_object() {
    let usage = parse_usage_json(r#"{"r1": 5, "r2": "7", "r3": null}"#);

    assert_eq!(usage.len(), 3);
    assert_eq!(usage.get("r1"), Some(&json!(5)));
    assert_eq!(usage.get("r2"), Some(&json!("7")));
}

#[test]
fn test_parse_usage_non_object_is_empty() {
    assert!(parse_usage_json("[1, 2]").is_empty());
    assert!(parse_usage_json("oops").is_empty());
    assert!(parse_usage_json("").is_empty());
}

#[test]
fn test_missing_files_yield_empty_snapshots() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(
        Some(dir.path().join("catalog.json")),
        Some(dir.path().join("usage.json")),
    );

    assert!(store.load_catalog().is_empty());
    assert!(store.load_usage().is_empty());
}

#[test]
fn test_no_paths_yield_empty_snapshots() {
    let store = JsonFileStore::new(None, None);
    assert!(store.load_catalog().is_empty());
    assert!(store.load_usage().is_empty());
}

#[test]
fn test_store_reads_files() {
    let dir = TempDir::new().unwrap();
    let catalog_path = write(
        &dir,
        "catalog.json",
        r#"[{"id": "f", "name": "F", "ranges": [{"id": "r1", "name": "A"}]}]"#,
    );
    let usage_path = write(&dir, "usage.json", r#"{"r1": 4}"#);
    let store = JsonFileStore::new(Some(catalog_path), Some(usage_path));

    assert_eq!(store.load_catalog().range_count(), 1);
    assert_eq!(store.load_usage().get("r1"), Some(&json!(4)));
}

#[test]
fn test_store_reloads_each_call() {
    let dir = TempDir::new().unwrap();
    let usage_path = write(&dir, "usage.json", r#"{"r1": 1}"#);
    let store = JsonFileStore::new(None, Some(usage_path.clone()));

    assert_eq!(store.load_usage().get("r1"), Some(&json!(1)));
    fs::write(&usage_path, r#"{"r1": 2}"#).unwrap();
    assert_eq!(store.load_usage().get("r1"), Some(&json!(2)));
}

#[test]
fn test_from_config_prefers_configured_paths() {
    let config = StorageConfig {
        catalog_path: Some(PathBuf::from("/data/catalog.json")),
        usage_path: Some(PathBuf::from("/data/usage.json")),
    };
    let store = JsonFileStore::from_config(&config);

    assert_eq!(store.catalog_path(), Some(Path::new("/data/catalog.json")));
    assert_eq!(store.usage_path(), Some(Path::new("/data/usage.json")));
}

#[test]
fn test_default_paths_live_under_data_dir() {
    if let Some(path) = default_catalog_path() {
        assert!(path.ends_with("rangestats/catalog.json"));
    }
    if let Some(path) = default_usage_path() {
        assert!(path.ends_with("rangestats/usage.json"));
    }
}
