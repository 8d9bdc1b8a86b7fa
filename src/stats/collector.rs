use std::collections::HashSet;

use crate::model::{ButtonKind, Chart};

/// Distinct range ids, kept in first-reference order
///
/// The order is what makes ranking ties deterministic: equal counts stay in
/// the order the chart first referenced them.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl ReferenceSet {
    /// Returns false if the id was already present
    pub fn insert(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string());
        self.ids.push(id.to_string());
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Collect every range a chart points at
///
/// Per button, the normal kind's `linkedItem` comes first (sentinels
/// excluded), then enabled link buttons in list order.
pub fn collect_references(chart: &Chart) -> ReferenceSet {
    let mut references = ReferenceSet::default();

    for button in &chart.buttons {
        match &button.kind {
            ButtonKind::Normal { linked_item } => {
                if let Some(id) = linked_item.as_ref().and_then(|item| item.range_id()) {
                    references.insert(id);
                }
            }
            ButtonKind::Other { .. } => {}
        }

        for link in &button.link_buttons {
            if let Some(id) = link.target() {
                references.insert(id);
            }
        }
    }

    references
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod collector_tests;
