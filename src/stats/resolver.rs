use std::collections::HashMap;

use serde_json::Value;

use crate::model::{Catalog, UsageTable};
use crate::stats::collector::ReferenceSet;
use crate::stats::types::ResolvedStat;

/// Range id -> (folder name, range name), built fresh for each resolution
pub struct CatalogIndex<'a> {
    entries: HashMap<&'a str, (&'a str, &'a str)>,
}

impl<'a> CatalogIndex<'a> {
    /// Scan every folder and range. A repeated range id keeps the last one seen.
    pub fn build(catalog: &'a Catalog) -> Self {
        let mut entries = HashMap::with_capacity(catalog.range_count());

        for folder in catalog.folders() {
            for range in &folder.ranges {
                let previous = entries.insert(
                    range.id.as_str(),
                    (folder.name.as_str(), range.name.as_str()),
                );

                if previous.is_some() {
                    #[cfg(debug_assertions)]
                    log::debug!(
                        "Duplicate range id {:?} in catalog, keeping folder {:?}",
                        range.id,
                        folder.name
                    );
                }
            }
        }

        Self { entries }
    }

    pub fn lookup(&self, range_id: &str) -> Option<(&'a str, &'a str)> {
        self.entries.get(range_id).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coerce a raw usage entry into a count
///
/// Non-negative integers pass through, non-negative finite floats and numeric
/// strings are truncated. Everything else, missing entries included, is 0.
pub fn coerce_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(number)) => match number.as_u64() {
            Some(count) => count,
            None => number.as_f64().map(float_to_count).unwrap_or(0),
        },
        Some(Value::String(text)) => text.trim().parse::<f64>().map(float_to_count).unwrap_or(0),
        _ => 0,
    }
}

fn float_to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        // `as` saturates at u64::MAX
        value.trunc() as u64
    } else {
        0
    }
}

/// Resolve each reference to display names and a usage count
///
/// Output order follows the reference set. Ids missing from the catalog
/// become orphans but keep whatever count the usage table holds.
pub fn resolve(
    references: &ReferenceSet,
    catalog: &Catalog,
    usage: &UsageTable,
) -> Vec<ResolvedStat> {
    let index = CatalogIndex::build(catalog);

    references
        .iter()
        .map(|range_id| {
            let count = coerce_count(usage.get(range_id));
            match index.lookup(range_id) {
                Some((folder_name, range_name)) => {
                    ResolvedStat::new(range_id, folder_name, range_name, count)
                }
                None => {
                    #[cfg(debug_assertions)]
                    log::debug!("Range {:?} not in catalog, resolving as orphan", range_id);
                    ResolvedStat::orphan(range_id, count)
                }
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
