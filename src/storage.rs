//! Snapshot providers for the catalog and the usage table
//!
//! Providers never fail: anything that cannot be read comes back as an empty
//! snapshot so the stats core always runs.

mod json_store;
mod provider;

pub use json_store::{
    JsonFileStore, default_catalog_path, default_usage_path, load_catalog_from_path,
    load_usage_from_path, parse_catalog_json, parse_usage_json,
};
pub use provider::{CatalogProvider, UsageProvider};
