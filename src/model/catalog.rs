//! Catalog snapshot: folders owning named ranges

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Range {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl Range {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Folder {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ranges: Vec<Range>,
}

impl Folder {
    pub fn new(id: impl Into<String>, name: impl Into<String>, ranges: Vec<Range>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ranges,
        }
    }
}

/// Every folder known at snapshot time
///
/// Range ids are expected to be unique across folders; nothing here
/// enforces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    folders: Vec<Folder>,
}

impl Catalog {
    pub fn new(folders: Vec<Folder>) -> Self {
        Self { folders }
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    /// Total number of ranges across all folders
    pub fn range_count(&self) -> usize {
        self.folders.iter().map(|f| f.ranges.len()).sum()
    }
}
