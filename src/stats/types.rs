//! Type definitions for resolved usage statistics

use std::fmt;

use serde::Serialize;

/// Maximum number of entries in the ranked view
pub const TOP_N: usize = 10;

/// Folder placeholder for a reference missing from the catalog
pub const ORPHAN_FOLDER_NAME: &str = "(folder no longer exists)";
/// Range placeholder for a reference missing from the catalog
pub const ORPHAN_RANGE_NAME: &str = "(range not found)";

/// One referenced range with its display names and usage count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStat {
    pub range_id: String,
    pub folder_name: String,
    pub range_name: String,
    pub count: u64,
    /// Set when the id has no catalog entry and the names are placeholders
    pub orphan: bool,
}

impl ResolvedStat {
    pub fn new(
        range_id: impl Into<String>,
        folder_name: impl Into<String>,
        range_name: impl Into<String>,
        count: u64,
    ) -> Self {
        Self {
            range_id: range_id.into(),
            folder_name: folder_name.into(),
            range_name: range_name.into(),
            count,
            orphan: false,
        }
    }

    pub fn orphan(range_id: impl Into<String>, count: u64) -> Self {
        Self {
            range_id: range_id.into(),
            folder_name: ORPHAN_FOLDER_NAME.to_string(),
            range_name: ORPHAN_RANGE_NAME.to_string(),
            count,
            orphan: true,
        }
    }
}

impl fmt::Display for ResolvedStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}: {}", self.folder_name, self.range_name, self.count)
    }
}
