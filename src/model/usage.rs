//! Usage table snapshot: raw per-range counts as stored
//!
//! Values are kept exactly as read. Turning them into counts is the
//! resolver's job (see `stats::coerce_count`), so a malformed entry never
//! fails a load.

use std::collections::HashMap;

use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageTable {
    entries: HashMap<String, Value>,
}

impl UsageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, range_id: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(range_id.into(), value.into());
    }

    /// Builder form of `insert`
    pub fn with(mut self, range_id: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(range_id, value);
        self
    }

    pub fn get(&self, range_id: &str) -> Option<&Value> {
        self.entries.get(range_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for UsageTable {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for UsageTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, count)| (id.into(), Value::from(count)))
                .collect(),
        }
    }
}
