use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::provider::{CatalogProvider, UsageProvider};
use crate::config::StorageConfig;
use crate::model::{Catalog, Folder, Range, UsageTable};

const DATA_DIR: &str = "rangestats";
const CATALOG_FILE: &str = "catalog.json";
const USAGE_FILE: &str = "usage.json";

pub fn default_catalog_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR).join(CATALOG_FILE))
}

pub fn default_usage_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR).join(USAGE_FILE))
}

/// Catalog and usage table stored as JSON files
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    catalog_path: Option<PathBuf>,
    usage_path: Option<PathBuf>,
}

impl JsonFileStore {
    pub fn new(catalog_path: Option<PathBuf>, usage_path: Option<PathBuf>) -> Self {
        Self {
            catalog_path,
            usage_path,
        }
    }

    /// Paths from config, falling back to the platform data directory
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.catalog_path.clone().or_else(default_catalog_path),
            config.usage_path.clone().or_else(default_usage_path),
        )
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    pub fn usage_path(&self) -> Option<&Path> {
        self.usage_path.as_deref()
    }
}

impl CatalogProvider for JsonFileStore {
    fn load_catalog(&self) -> Catalog {
        match &self.catalog_path {
            Some(path) => load_catalog_from_path(path),
            None => Catalog::default(),
        }
    }
}

impl UsageProvider for JsonFileStore {
    fn load_usage(&self) -> UsageTable {
        match &self.usage_path {
            Some(path) => load_usage_from_path(path),
            None => UsageTable::default(),
        }
    }
}

pub fn load_catalog_from_path(path: &Path) -> Catalog {
    match read_optional(path) {
        Some(contents) => parse_catalog_json(&contents),
        None => Catalog::default(),
    }
}

pub fn load_usage_from_path(path: &Path) -> UsageTable {
    match read_optional(path) {
        Some(contents) => parse_usage_json(&contents),
        None => UsageTable::default(),
    }
}

fn read_optional(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) => {
            log::debug!("Could not read {:?}, using empty snapshot: {}", path, e);
            None
        }
    }
}

/// Parse a catalog document, skipping folders and ranges that don't fit
///
/// Accepts a bare folder array or an object with a `folders` array.
pub fn parse_catalog_json(content: &str) -> Catalog {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Catalog is not valid JSON, using empty catalog: {}", e);
            return Catalog::default();
        }
    };

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("folders") {
            Some(Value::Array(entries)) => entries,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Catalog::new(entries.into_iter().filter_map(parse_folder).collect())
}

fn parse_folder(entry: Value) -> Option<Folder> {
    let Value::Object(mut map) = entry else {
        log::warn!("Skipping catalog folder that is not an object");
        return None;
    };

    let ranges = match map.remove("ranges") {
        Some(Value::Array(items)) => items.into_iter().filter_map(parse_range).collect(),
        _ => Vec::new(),
    };

    Some(Folder::new(
        string_field(&map, "id"),
        string_field(&map, "name"),
        ranges,
    ))
}

fn parse_range(item: Value) -> Option<Range> {
    let Value::Object(map) = item else {
        log::warn!("Skipping catalog range that is not an object");
        return None;
    };

    let Some(id) = map.get("id").and_then(Value::as_str) else {
        log::warn!("Skipping catalog range without a string id");
        return None;
    };

    Some(Range::new(id, string_field(&map, "name")))
}

fn string_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Parse a usage document. Anything but a JSON object is an empty table.
pub fn parse_usage_json(content: &str) -> UsageTable {
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => UsageTable::from(map),
        Ok(_) => {
            log::warn!("Usage table is not a JSON object, using empty table");
            UsageTable::default()
        }
        Err(e) => {
            log::warn!("Usage table is not valid JSON, using empty table: {}", e);
            UsageTable::default()
        }
    }
}

#[cfg(test)]
#[path = "json_store_tests.rs"]
mod json_store_tests;
